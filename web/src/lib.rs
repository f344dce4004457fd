//! # Ticketd Web
//!
//! Axum integration for the ticketd backend: the HTTP error envelope and
//! request extractors shared by the server's handlers.
//!
//! The domain crates know nothing about HTTP; this crate owns the mapping
//! from `AuthError`/`TicketError` to status codes and the JSON error body
//! `{"code", "message"}`.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::BearerToken;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
