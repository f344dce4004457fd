//! Console email sender for development.

use async_trait::async_trait;
use tracing::info;

use crate::error::Result;
use crate::providers::EmailSender;

/// Console email sender.
///
/// Logs emails instead of sending them. Useful in development where no
/// SMTP relay is configured.
#[derive(Clone, Debug, Default)]
pub struct ConsoleEmailSender;

impl ConsoleEmailSender {
    /// Create a new console email sender.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailSender for ConsoleEmailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        info!(to = %to, subject = %subject, body = %body, "email (console mode, not sent)");
        Ok(())
    }
}
