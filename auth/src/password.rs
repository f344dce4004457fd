//! Password hashing via bcrypt.

use crate::error::{AuthError, Result};

/// bcrypt cost factor.
const BCRYPT_COST: u32 = 10;

/// Hash a password with bcrypt.
///
/// The output embeds salt and cost; it is opaque and irreversible.
///
/// # Errors
///
/// Returns `AuthError::Internal` if hashing fails.
pub fn hash_password(password: &str) -> Result<String> {
    bcrypt::hash(password, BCRYPT_COST)
        .map_err(|e| AuthError::Internal(format!("bcrypt hash: {e}")))
}

/// Verify a password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns `AuthError::Internal` if the stored hash is not a valid bcrypt
/// string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(password, hash)
        .map_err(|e| AuthError::Internal(format!("bcrypt verify: {e}")))
}
