//! SMTP email sender implementation using Lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::error::{AuthError, Result};
use crate::providers::EmailSender;

/// SMTP email sender using Lettre.
///
/// Sends real mail via authenticated SMTP submission, suitable for
/// production use.
///
/// # Examples
///
/// ```ignore
/// use ticketd_auth::providers::SmtpEmailSender;
///
/// let sender = SmtpEmailSender::new(
///     "smtp.example.com".to_string(),
///     587,
///     "mailer@example.com".to_string(),
///     "app_password".to_string(),
///     "noreply@example.com".to_string(),
/// );
/// ```
#[derive(Clone)]
pub struct SmtpEmailSender {
    /// SMTP server address.
    smtp_host: String,

    /// SMTP server port.
    smtp_port: u16,

    /// SMTP credentials.
    credentials: Credentials,

    /// Sender address.
    from: String,
}

impl SmtpEmailSender {
    /// Create a new SMTP email sender.
    #[must_use]
    pub fn new(
        smtp_host: String,
        smtp_port: u16,
        smtp_user: String,
        smtp_password: String,
        from: String,
    ) -> Self {
        Self {
            smtp_host,
            smtp_port,
            credentials: Credentials::new(smtp_user, smtp_password),
            from,
        }
    }

    /// Build an SMTP transport.
    ///
    /// A fresh transport per send avoids connection pooling issues.
    fn build_transport(&self) -> Result<SmtpTransport> {
        Ok(SmtpTransport::relay(&self.smtp_host)
            .map_err(|e| AuthError::Email(format!("SMTP relay error: {e}")))?
            .port(self.smtp_port)
            .credentials(self.credentials.clone())
            .build())
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let email = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| AuthError::Email(format!("Invalid from address: {e}")))?,
            )
            .to(to
                .parse()
                .map_err(|e| AuthError::Email(format!("Invalid to address: {e}")))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| AuthError::Email(format!("Failed to build email: {e}")))?;

        let mailer = self.build_transport()?;

        // The sync transport blocks; keep it off the request task.
        tokio::task::spawn_blocking(move || {
            mailer
                .send(&email)
                .map_err(|e| AuthError::Email(format!("Failed to send email: {e}")))
        })
        .await
        .map_err(|e| AuthError::Email(format!("Email task failed: {e}")))?
        .map(|_| ())
    }
}
