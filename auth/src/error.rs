//! Error types for authentication and authorization operations.

use thiserror::Error;

/// Result type alias for authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Error taxonomy for authentication and authorization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No user is registered under the given email.
    #[error("User not found")]
    UserNotFound,

    /// Registration attempted with an email that is already taken.
    #[error("Email already registered")]
    EmailTaken,

    /// Password does not verify against the stored hash.
    #[error("Invalid password")]
    InvalidPassword,

    /// Confirmation code is absent or does not match the stored code.
    #[error("Invalid confirmation code")]
    InvalidCode,

    /// Bearer credential could not be validated.
    ///
    /// All token decode failures (malformed, expired, forged, wrong kind,
    /// unknown subject) collapse into this single variant so callers cannot
    /// distinguish them.
    #[error("Could not validate credentials")]
    Unauthorized,

    /// Email delivery failed.
    #[error("Email delivery failed: {0}")]
    Email(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal error (hashing, signing, serialization).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Returns `true` if this error is due to invalid user input rather
    /// than a system failure.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ticketd_auth::AuthError;
    /// assert!(AuthError::InvalidPassword.is_user_error());
    /// assert!(!AuthError::Database("connection reset".into()).is_user_error());
    /// ```
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound
                | Self::EmailTaken
                | Self::InvalidPassword
                | Self::InvalidCode
                | Self::Unauthorized
        )
    }
}
