//! Cursor-based pagination
//!
//! [`PageRequest`] carries the caller's intent (sort, page size and at most
//! one directional cursor). [`PageResponse`] describes the page that was
//! produced and derives the requests for the neighbouring pages. Everything
//! here is a plain value type with no I/O.

pub mod error;
pub mod request;
pub mod response;
pub mod sort;

pub use error::PaginationError;
pub use request::{Cursor, PageRequest, DEFAULT_LIMIT, DEFAULT_SORT, MAX_LIMIT};
pub use response::PageResponse;
pub use sort::{Sort, SortDirection, SortKey};
