//! Router configuration.
//!
//! Builds the complete Axum router. Paths mirror the public API,
//! including the historical double-segment quirks `/users/users/me` and
//! `/tickets/tickets/:id/close`.

use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{auth, health, tickets, users};
use crate::state::AppState;

/// Build the complete Axum router.
pub fn build_router(state: AppState) -> Router {
    let users_routes = Router::new()
        .route("/register", post(users::register))
        .route("/users/me", get(users::me));

    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/confirm-login", post(auth::confirm_login))
        .route("/refresh-token", post(auth::refresh_token));

    // Mounted with absolute paths rather than nested: axum's `nest`
    // serves a child `/` route at the prefix without its trailing slash
    // (`/tickets`, not `/tickets/`), but the API contract is `/tickets/`.
    let tickets_routes = Router::new()
        .route("/tickets/", post(tickets::create).get(tickets::list))
        .route(
            "/tickets/:id",
            get(tickets::get).put(tickets::update).delete(tickets::remove),
        )
        .route("/tickets/tickets/:id/close", patch(tickets::close));

    Router::new()
        // Health check (no authentication)
        .route("/health", get(health::health_check))
        .nest("/users", users_routes)
        .nest("/auth", auth_routes)
        .merge(tickets_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
