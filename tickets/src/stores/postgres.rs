//! PostgreSQL ticket store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::{Result, TicketError};
use crate::model::{NewTicket, SortBy, SortOrder, Ticket, TicketPatch, TicketStatus};
use crate::store::TicketStore;

/// PostgreSQL ticket store.
///
/// Expects the `tickets` table from the server's migrations.
#[derive(Clone)]
pub struct PgTicketStore {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct TicketRow {
    id: i64,
    title: String,
    description: Option<String>,
    status: String,
    owner_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = TicketError;

    fn try_from(row: TicketRow) -> Result<Self> {
        Ok(Self {
            id: row.id,
            title: row.title,
            description: row.description,
            status: TicketStatus::parse(&row.status)?,
            owner_id: row.owner_id,
            created_at: row.created_at,
        })
    }
}

impl PgTicketStore {
    /// Create a store over an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(e: sqlx::Error) -> TicketError {
    TicketError::Database(e.to_string())
}

/// Sort keys map to fixed SQL fragments; caller input never reaches the
/// query text.
const fn order_clause(sort_by: SortBy, order: SortOrder) -> &'static str {
    match (sort_by, order) {
        (SortBy::CreatedAt, SortOrder::Asc) => "created_at ASC, id ASC",
        (SortBy::CreatedAt, SortOrder::Desc) => "created_at DESC, id DESC",
        (SortBy::Title, SortOrder::Asc) => "title ASC, id ASC",
        (SortBy::Title, SortOrder::Desc) => "title DESC, id DESC",
    }
}

#[async_trait]
impl TicketStore for PgTicketStore {
    async fn insert(&self, owner_id: i64, ticket: NewTicket) -> Result<Ticket> {
        let row: TicketRow = sqlx::query_as(
            "INSERT INTO tickets (title, description, status, owner_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, title, description, status, owner_id, created_at",
        )
        .bind(&ticket.title)
        .bind(&ticket.description)
        .bind(ticket.status.as_str())
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        row.try_into()
    }

    async fn fetch(&self, id: i64) -> Result<Option<Ticket>> {
        let row: Option<TicketRow> = sqlx::query_as(
            "SELECT id, title, description, status, owner_id, created_at \
             FROM tickets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(Ticket::try_from).transpose()
    }

    async fn list(
        &self,
        owner_id: i64,
        skip: i64,
        limit: i64,
        sort_by: SortBy,
        order: SortOrder,
    ) -> Result<Vec<Ticket>> {
        let query = format!(
            "SELECT id, title, description, status, owner_id, created_at \
             FROM tickets WHERE owner_id = $1 \
             ORDER BY {} OFFSET $2 LIMIT $3",
            order_clause(sort_by, order)
        );
        let rows: Vec<TicketRow> = sqlx::query_as(&query)
            .bind(owner_id)
            .bind(skip.max(0))
            .bind(limit.max(0))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        rows.into_iter().map(Ticket::try_from).collect()
    }

    async fn count(&self, owner_id: i64) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tickets WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(count.0)
    }

    async fn apply_patch(&self, id: i64, patch: &TicketPatch) -> Result<Option<Ticket>> {
        // COALESCE applies only the fields present in the patch; absent
        // fields keep the stored value.
        let row: Option<TicketRow> = sqlx::query_as(
            "UPDATE tickets SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 status = COALESCE($4, status) \
             WHERE id = $1 \
             RETURNING id, title, description, status, owner_id, created_at",
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(patch.status.map(TicketStatus::as_str))
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(Ticket::try_from).transpose()
    }

    async fn remove(&self, id: i64) -> Result<Option<Ticket>> {
        let row: Option<TicketRow> = sqlx::query_as(
            "DELETE FROM tickets WHERE id = $1 \
             RETURNING id, title, description, status, owner_id, created_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(Ticket::try_from).transpose()
    }
}
