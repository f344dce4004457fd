//! Shared application state.

use std::sync::Arc;

use ticketd_auth::AuthService;
use ticketd_tickets::TicketService;

/// State shared by every handler.
///
/// Both services are behind `Arc`s; cloning the state per request is
/// cheap.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service.
    pub auth: Arc<AuthService>,
    /// Ticket service.
    pub tickets: Arc<TicketService>,
}

impl AppState {
    /// Bundle the services into shared state.
    #[must_use]
    pub fn new(auth: AuthService, tickets: TicketService) -> Self {
        Self {
            auth: Arc::new(auth),
            tickets: Arc::new(tickets),
        }
    }
}
