use thiserror::Error;

/// Failures raised while decoding or interpreting pagination parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The request was not anchored to an endpoint URL.
    #[error("url cannot be empty")]
    EmptyUrl,

    #[error("Malformed sort entry `{entry}`: expected `column:direction`")]
    MalformedSort { entry: String },

    #[error("Unknown sort direction `{direction}` for column `{column}` (expected ASC or DESC)")]
    UnknownDirection { column: String, direction: String },

    #[error("Invalid sort column `{0}`")]
    InvalidColumn(String),

    #[error("Sort column `{0}` is listed more than once")]
    DuplicateSortColumn(String),

    #[error("starting_after and ending_before cannot both be set")]
    ConflictingCursors,

    #[error("Invalid pagination query: {0}")]
    InvalidQuery(String),
}

impl PaginationError {
    /// Whether the requester caused the failure (bad input) rather than the
    /// server being misconfigured.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, PaginationError::EmptyUrl)
    }
}
