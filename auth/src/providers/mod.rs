//! Authentication providers.
//!
//! Traits for the external collaborators the auth core depends on: the
//! credential store and the outbound email sender. The service depends on
//! these traits only; the binary wires in concrete implementations.
//!
//! This enables:
//! - **Testing**: in-memory store + recording sender, no network
//! - **Production**: PostgreSQL store + authenticated SMTP submission
//! - **Development**: console sender that logs instead of sending

use chrono::{DateTime, Utc};

pub mod console_email;
pub mod email;
pub mod smtp_email;
pub mod user_store;

#[cfg(feature = "test-utils")]
pub mod recording_email;

pub use console_email::ConsoleEmailSender;
pub use email::EmailSender;
pub use smtp_email::SmtpEmailSender;
pub use user_store::UserStore;

#[cfg(feature = "test-utils")]
pub use recording_email::{RecordingEmailSender, SentEmail};

/// User identity record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-assigned identifier.
    pub id: i64,

    /// Email address; unique, used as the token subject.
    pub email: String,

    /// bcrypt password hash. Opaque, never exposed on the wire.
    pub password_hash: String,

    /// Outstanding one-time confirmation code, if a login challenge is
    /// live. Cleared on successful confirmation.
    pub confirmation_code: Option<String>,

    /// Account created timestamp.
    pub created_at: DateTime<Utc>,
}
