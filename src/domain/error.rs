//! Domain errors

use thiserror::Error;

use super::pagination::PaginationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error("Unknown cursor: {0}")]
    UnknownCursor(String),

    #[error("Unsupported sort column: {0}")]
    UnsupportedSortColumn(String),

    #[error("Invalid limit {0}: must be between 1 and {max}", max = super::pagination::MAX_LIMIT)]
    InvalidLimit(i64),
}

impl DomainError {
    /// Whether the error stems from the requester's input.
    pub fn is_client_error(&self) -> bool {
        match self {
            DomainError::Pagination(e) => e.is_client_error(),
            _ => true,
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
