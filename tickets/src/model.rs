//! Ticket domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TicketError};

/// Ticket status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    /// Ticket is open for work.
    #[default]
    Open,
    /// Ticket has been closed.
    Closed,
}

impl TicketStatus {
    /// Stable string form, matching the wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Parse the storage representation.
    ///
    /// # Errors
    ///
    /// Returns `TicketError::Database` for anything but `open`/`closed`;
    /// an unknown status in a row is a data problem, not caller input.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            other => Err(TicketError::Database(format!("unknown status: {other}"))),
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owned ticket record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    /// Store-assigned identifier.
    pub id: i64,
    /// Short summary; never empty.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Current status.
    pub status: TicketStatus,
    /// Owning user's id. Exactly one owner per ticket.
    pub owner_id: i64,
    /// Server-assigned creation timestamp; immutable.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a ticket.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTicket {
    /// Required title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Initial status; defaults to open.
    #[serde(default)]
    pub status: TicketStatus,
}

/// Explicit partial update.
///
/// Each field is present-or-absent; only present fields are applied, by
/// enumeration, never by reflective attribute assignment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketPatch {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement status.
    #[serde(default)]
    pub status: Option<TicketStatus>,
}

impl TicketPatch {
    /// A patch that only forces the status to closed.
    #[must_use]
    pub const fn close() -> Self {
        Self {
            title: None,
            description: None,
            status: Some(TicketStatus::Closed),
        }
    }
}

/// Sort key for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Sort by creation timestamp.
    CreatedAt,
    /// Sort by title.
    Title,
}

impl SortBy {
    /// Parse a query-string value.
    ///
    /// # Errors
    ///
    /// Returns `TicketError::InvalidQuery` for anything outside
    /// `created_at`/`title`.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "created_at" => Ok(Self::CreatedAt),
            "title" => Ok(Self::Title),
            _ => Err(TicketError::InvalidQuery(
                "sort_by must be 'created_at' or 'title'".to_string(),
            )),
        }
    }
}

/// Sort direction for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Parse a query-string value.
    ///
    /// # Errors
    ///
    /// Returns `TicketError::InvalidQuery` for anything outside
    /// `asc`/`desc`.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(TicketError::InvalidQuery(
                "order must be 'asc' or 'desc'".to_string(),
            )),
        }
    }
}

/// One page of a ticket listing.
///
/// `total` counts all of the owner's tickets, independent of the
/// pagination window.
#[derive(Debug, Clone, Serialize)]
pub struct TicketPage {
    /// Tickets in this window, sorted.
    pub tickets: Vec<Ticket>,
    /// Total tickets owned, ignoring skip/limit.
    pub total: i64,
    /// Echoed offset.
    pub skip: i64,
    /// Echoed window size.
    pub limit: i64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_status_wire_form() {
        assert_eq!(TicketStatus::Open.to_string(), "open");
        assert_eq!(TicketStatus::parse("closed").unwrap(), TicketStatus::Closed);
        assert!(TicketStatus::parse("OPEN").is_err());
        assert_eq!(TicketStatus::default(), TicketStatus::Open);
    }

    #[test]
    fn test_sort_parsing() {
        assert_eq!(SortBy::parse("created_at").unwrap(), SortBy::CreatedAt);
        assert_eq!(SortBy::parse("title").unwrap(), SortBy::Title);
        assert!(matches!(
            SortBy::parse("bogus").unwrap_err(),
            TicketError::InvalidQuery(_)
        ));

        assert_eq!(SortOrder::parse("asc").unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::parse("desc").unwrap(), SortOrder::Desc);
        assert!(matches!(
            SortOrder::parse("sideways").unwrap_err(),
            TicketError::InvalidQuery(_)
        ));
    }

    #[test]
    fn test_close_patch_only_touches_status() {
        let patch = TicketPatch::close();
        assert_eq!(patch.title, None);
        assert_eq!(patch.description, None);
        assert_eq!(patch.status, Some(TicketStatus::Closed));
    }
}
