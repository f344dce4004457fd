//! Credential store trait.

use async_trait::async_trait;

use super::User;
use crate::error::Result;

/// Credential store.
///
/// Narrow contract over user persistence. Each operation is individually
/// atomic; there is no cross-operation transaction, so concurrent login
/// challenges for the same user are last-write-wins on the confirmation
/// code.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by email.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Database` if the query fails.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Create a user with the given email and password hash.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailTaken` if the email is already registered,
    /// `AuthError::Database` if the insert fails.
    async fn insert(&self, email: &str, password_hash: &str) -> Result<User>;

    /// Set or clear the user's one-time confirmation code.
    ///
    /// Overwrites any outstanding code; passing `None` clears it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if no such user exists,
    /// `AuthError::Database` if the update fails.
    async fn update_confirmation_code(&self, email: &str, code: Option<&str>) -> Result<()>;
}
