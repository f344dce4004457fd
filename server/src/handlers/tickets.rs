//! Ticket endpoints: ownership-scoped CRUD.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use ticketd_tickets::{NewTicket, Ticket, TicketPage, TicketPatch};
use ticketd_web::AppError;

use crate::extract::CurrentUser;
use crate::state::AppState;

/// List parameters.
///
/// `sort_by` and `order` stay raw strings here; the service validates
/// them against the enumerated sets and rejects anything else with 400.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Records to skip.
    #[serde(default)]
    pub skip: i64,
    /// Window size.
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Sort key: `created_at` or `title`.
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    /// Sort direction: `asc` or `desc`.
    #[serde(default = "default_order")]
    pub order: String,
}

const fn default_limit() -> i64 {
    100
}

fn default_sort_by() -> String {
    "created_at".to_string()
}

fn default_order() -> String {
    "desc".to_string()
}

/// `POST /tickets/`: create a ticket owned by the caller.
///
/// # Errors
///
/// 400 for a blank title.
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(ticket): Json<NewTicket>,
) -> Result<Json<Ticket>, AppError> {
    let ticket = state.tickets.create(user.id, ticket).await?;
    Ok(Json(ticket))
}

/// `GET /tickets/`: list the caller's tickets, paged and sorted.
///
/// # Errors
///
/// 400 for sort parameters outside the enumerated sets.
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<TicketPage>, AppError> {
    let page = state
        .tickets
        .list(user.id, query.skip, query.limit, &query.sort_by, &query.order)
        .await?;
    Ok(Json(page))
}

/// `GET /tickets/:id`: fetch one of the caller's tickets.
///
/// # Errors
///
/// 404 if absent or owned by someone else.
pub async fn get(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<Ticket>, AppError> {
    let ticket = state.tickets.get(user.id, id).await?;
    Ok(Json(ticket))
}

/// `PUT /tickets/:id`: partially update one of the caller's tickets.
///
/// # Errors
///
/// 404 if absent, 403 if owned by someone else.
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(patch): Json<TicketPatch>,
) -> Result<Json<Ticket>, AppError> {
    let ticket = state.tickets.update(user.id, id, patch).await?;
    Ok(Json(ticket))
}

/// `PATCH /tickets/tickets/:id/close`: close one of the caller's
/// tickets.
///
/// # Errors
///
/// 404 if absent, 403 if owned by someone else.
pub async fn close(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<Ticket>, AppError> {
    let ticket = state.tickets.close(user.id, id).await?;
    Ok(Json(ticket))
}

/// `DELETE /tickets/:id`: delete one of the caller's tickets, returning
/// its last state.
///
/// # Errors
///
/// 404 if absent, 403 if owned by someone else.
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<Ticket>, AppError> {
    let ticket = state.tickets.delete(user.id, id).await?;
    Ok(Json(ticket))
}
