//! In-memory ticket store for tests and development.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::error::Result;
use crate::model::{NewTicket, SortBy, SortOrder, Ticket, TicketPatch};
use crate::store::TicketStore;

/// In-memory ticket store.
///
/// Mutex-guarded map keyed by id. Listing sorts a snapshot, so the same
/// ordering rules apply as in SQL; ties on `created_at` break by id for
/// determinism.
#[derive(Debug, Default)]
pub struct MemoryTicketStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    tickets: BTreeMap<i64, Ticket>,
}

impl MemoryTicketStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TicketStore for MemoryTicketStore {
    async fn insert(&self, owner_id: i64, ticket: NewTicket) -> Result<Ticket> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.next_id += 1;
        let ticket = Ticket {
            id: inner.next_id,
            title: ticket.title,
            description: ticket.description,
            status: ticket.status,
            owner_id,
            created_at: Utc::now(),
        };
        inner.tickets.insert(ticket.id, ticket.clone());
        Ok(ticket)
    }

    async fn fetch(&self, id: i64) -> Result<Option<Ticket>> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.tickets.get(&id).cloned())
    }

    async fn list(
        &self,
        owner_id: i64,
        skip: i64,
        limit: i64,
        sort_by: SortBy,
        order: SortOrder,
    ) -> Result<Vec<Ticket>> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let mut tickets: Vec<Ticket> = inner
            .tickets
            .values()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect();

        tickets.sort_by(|a, b| {
            let ordering = match sort_by {
                SortBy::CreatedAt => a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)),
                SortBy::Title => a.title.cmp(&b.title).then(a.id.cmp(&b.id)),
            };
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let skip = usize::try_from(skip.max(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        Ok(tickets.into_iter().skip(skip).take(limit).collect())
    }

    async fn count(&self, owner_id: i64) -> Result<i64> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let count = inner
            .tickets
            .values()
            .filter(|t| t.owner_id == owner_id)
            .count();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    async fn apply_patch(&self, id: i64, patch: &TicketPatch) -> Result<Option<Ticket>> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(ticket) = inner.tickets.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(title) = &patch.title {
            ticket.title = title.clone();
        }
        if let Some(description) = &patch.description {
            ticket.description = Some(description.clone());
        }
        if let Some(status) = patch.status {
            ticket.status = status;
        }
        Ok(Some(ticket.clone()))
    }

    async fn remove(&self, id: i64) -> Result<Option<Ticket>> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.tickets.remove(&id))
    }
}
