//! Error types for ticket operations.

use thiserror::Error;

/// Result type alias for ticket operations.
pub type Result<T> = std::result::Result<T, TicketError>;

/// Error taxonomy for ticket operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TicketError {
    /// Ticket does not exist (or is not visible to the requester).
    #[error("Ticket not found")]
    NotFound,

    /// Requester is not the ticket's owner.
    #[error("Not enough permissions")]
    Forbidden,

    /// Title is missing or blank.
    #[error("title must not be empty")]
    InvalidTitle,

    /// List parameters outside the enumerated sort/order sets.
    #[error("{0}")]
    InvalidQuery(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TicketError::NotFound.to_string(), "Ticket not found");
        assert_eq!(
            TicketError::InvalidQuery("order must be 'asc' or 'desc'".into()).to_string(),
            "order must be 'asc' or 'desc'"
        );
    }
}
