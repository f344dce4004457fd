//! # Ticketd Tickets
//!
//! Ownership-scoped ticket CRUD: model, explicit patch semantics,
//! sort/pagination parameters, the store contract, and the service that
//! enforces the ownership invariant: every ticket has exactly one owner,
//! and only the owner may read, mutate, or delete it.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

pub mod error;
pub mod model;
pub mod service;
pub mod store;
pub mod stores;

// Re-export main types for convenience
pub use error::{Result, TicketError};
pub use model::{NewTicket, SortBy, SortOrder, Ticket, TicketPage, TicketPatch, TicketStatus};
pub use service::TicketService;
pub use store::TicketStore;
