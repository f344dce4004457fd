//! Ticket service: ownership-scoped CRUD.
//!
//! Every operation takes the acting owner's id, resolved upstream by the
//! authorization guard. The store itself is ownership-agnostic; all
//! authorization decisions happen here.

use std::sync::Arc;

use tracing::info;

use crate::error::{Result, TicketError};
use crate::model::{NewTicket, SortBy, SortOrder, Ticket, TicketPage, TicketPatch};
use crate::store::TicketStore;

/// Ticket service.
#[derive(Clone)]
pub struct TicketService {
    store: Arc<dyn TicketStore>,
}

impl TicketService {
    /// Create a new ticket service.
    #[must_use]
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self { store }
    }

    /// Create a ticket owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// - Title empty or whitespace → `TicketError::InvalidTitle`
    pub async fn create(&self, owner_id: i64, ticket: NewTicket) -> Result<Ticket> {
        if ticket.title.trim().is_empty() {
            return Err(TicketError::InvalidTitle);
        }
        let ticket = self.store.insert(owner_id, ticket).await?;
        info!(ticket_id = ticket.id, owner_id, "ticket created");
        Ok(ticket)
    }

    /// List one window of the owner's tickets.
    ///
    /// `sort_by` and `order` arrive as raw query-string values and are
    /// validated before the store is touched. `total` counts all of the
    /// owner's tickets regardless of the window.
    ///
    /// # Errors
    ///
    /// - Sort key or order outside the enumerated sets →
    ///   `TicketError::InvalidQuery`
    pub async fn list(
        &self,
        owner_id: i64,
        skip: i64,
        limit: i64,
        sort_by: &str,
        order: &str,
    ) -> Result<TicketPage> {
        let sort_by = SortBy::parse(sort_by)?;
        let order = SortOrder::parse(order)?;

        let tickets = self.store.list(owner_id, skip, limit, sort_by, order).await?;
        let total = self.store.count(owner_id).await?;
        Ok(TicketPage {
            tickets,
            total,
            skip,
            limit,
        })
    }

    /// Fetch one of the owner's tickets by id.
    ///
    /// Reads are ownership-scoped like every other operation; another
    /// user's ticket is reported as absent rather than forbidden, so ids
    /// leak nothing about foreign tickets.
    ///
    /// # Errors
    ///
    /// - Absent, or owned by someone else → `TicketError::NotFound`
    pub async fn get(&self, owner_id: i64, id: i64) -> Result<Ticket> {
        let ticket = self.store.fetch(id).await?.ok_or(TicketError::NotFound)?;
        if ticket.owner_id != owner_id {
            return Err(TicketError::NotFound);
        }
        Ok(ticket)
    }

    /// Apply a partial update to one of the owner's tickets.
    ///
    /// Only fields present in the patch change.
    ///
    /// # Errors
    ///
    /// - No such ticket → `TicketError::NotFound`
    /// - Requester is not the owner → `TicketError::Forbidden`
    pub async fn update(&self, owner_id: i64, id: i64, patch: TicketPatch) -> Result<Ticket> {
        self.check_owner(owner_id, id).await?;
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(TicketError::InvalidTitle);
            }
        }
        let ticket = self
            .store
            .apply_patch(id, &patch)
            .await?
            .ok_or(TicketError::NotFound)?;
        info!(ticket_id = id, owner_id, "ticket updated");
        Ok(ticket)
    }

    /// Close one of the owner's tickets.
    ///
    /// Convenience for [`update`](Self::update) with the status forced to
    /// closed.
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update).
    pub async fn close(&self, owner_id: i64, id: i64) -> Result<Ticket> {
        self.update(owner_id, id, TicketPatch::close()).await
    }

    /// Delete one of the owner's tickets, returning its last state.
    ///
    /// # Errors
    ///
    /// - No such ticket → `TicketError::NotFound`
    /// - Requester is not the owner → `TicketError::Forbidden`
    pub async fn delete(&self, owner_id: i64, id: i64) -> Result<Ticket> {
        self.check_owner(owner_id, id).await?;
        let ticket = self
            .store
            .remove(id)
            .await?
            .ok_or(TicketError::NotFound)?;
        info!(ticket_id = id, owner_id, "ticket deleted");
        Ok(ticket)
    }

    /// Mutations distinguish missing from foreign: absent is `NotFound`,
    /// present-but-not-yours is `Forbidden`.
    async fn check_owner(&self, owner_id: i64, id: i64) -> Result<()> {
        let ticket = self.store.fetch(id).await?.ok_or(TicketError::NotFound)?;
        if ticket.owner_id != owner_id {
            return Err(TicketError::Forbidden);
        }
        Ok(())
    }
}
