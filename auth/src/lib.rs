//! # Ticketd Authentication
//!
//! Authentication core for the ticketd backend: the email-code login
//! challenge, the dual access/refresh bearer-token scheme, and the
//! authorization guard that gates protected operations.
//!
//! ## Flow
//!
//! ```text
//! register ─┐
//!           ├─► code stored on user ─► email dispatched
//! login ────┘
//!
//! confirm-login ─► code cleared ─► access + refresh tokens issued
//!
//! refresh-token ─► guard(refresh kind) ─► new access token
//! protected op ──► guard(access kind) ──► resolved user
//! ```
//!
//! The service depends on two narrow collaborator traits,
//! [`providers::UserStore`] and [`providers::EmailSender`], so the whole
//! flow runs at memory speed in tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

pub mod code;
pub mod config;
pub mod error;
pub mod password;
pub mod providers;
pub mod service;
pub mod stores;
pub mod token;

// Re-export main types for convenience
pub use config::TokenConfig;
pub use error::{AuthError, Result};
pub use providers::User;
pub use service::AuthService;
pub use token::{Claims, TokenCodec, TokenKind, TokenPair};
