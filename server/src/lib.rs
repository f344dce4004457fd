//! # Ticketd Server
//!
//! HTTP server for the ticketd backend: environment configuration,
//! application state, the Axum router, and request handlers. The
//! interesting logic lives in `ticketd-auth` and `ticketd-tickets`;
//! handlers here are thin adapters over those services.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

pub mod config;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export main types for convenience
pub use config::Config;
pub use routes::build_router;
pub use state::AppState;
