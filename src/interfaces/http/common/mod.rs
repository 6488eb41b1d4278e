//! Shared HTTP building blocks

pub mod api_response;
pub mod page_query;
pub mod response_format;
pub mod validated_query;

pub use api_response::{ApiError, ApiResponse, PaginatedResponse};
pub use page_query::PageQuery;
pub use response_format::ResponseFormat;
pub use validated_query::{ValidatedQuery, ValidatedQueryRejection};
