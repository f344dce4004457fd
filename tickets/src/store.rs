//! Ticket store trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{NewTicket, SortBy, SortOrder, Ticket, TicketPatch};

/// Ticket persistence.
///
/// The store is ownership-agnostic: it filters listings by owner but
/// performs no authorization. Ownership checks live in the service.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Persist a new ticket; the store assigns id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns `TicketError::Database` if the insert fails.
    async fn insert(&self, owner_id: i64, ticket: NewTicket) -> Result<Ticket>;

    /// Fetch a ticket by id, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `TicketError::Database` if the query fails.
    async fn fetch(&self, id: i64) -> Result<Option<Ticket>>;

    /// List one window of an owner's tickets, sorted.
    ///
    /// # Errors
    ///
    /// Returns `TicketError::Database` if the query fails.
    async fn list(
        &self,
        owner_id: i64,
        skip: i64,
        limit: i64,
        sort_by: SortBy,
        order: SortOrder,
    ) -> Result<Vec<Ticket>>;

    /// Count all of an owner's tickets.
    ///
    /// # Errors
    ///
    /// Returns `TicketError::Database` if the query fails.
    async fn count(&self, owner_id: i64) -> Result<i64>;

    /// Apply a partial update, returning the updated ticket or `None` if
    /// absent. Only fields present in the patch change.
    ///
    /// # Errors
    ///
    /// Returns `TicketError::Database` if the update fails.
    async fn apply_patch(&self, id: i64, patch: &TicketPatch) -> Result<Option<Ticket>>;

    /// Delete a ticket, returning its last state or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `TicketError::Database` if the delete fails.
    async fn remove(&self, id: i64) -> Result<Option<Ticket>>;
}
