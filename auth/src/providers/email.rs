//! Email sender trait.

use async_trait::async_trait;

use crate::error::Result;

/// Outbound email sender.
///
/// Abstracts over the mail transport (SMTP in production). Sends are
/// awaited inline by the auth flows: a delivery failure fails the whole
/// operation, with no retry or local fallback.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send a plain-text email.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Email` if the message cannot be built or the
    /// transport rejects it.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}
