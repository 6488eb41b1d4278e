pub mod error;
pub mod history;
pub mod pagination;

pub use error::{DomainError, DomainResult};
pub use history::{History, HistoryPage, HistoryRepository, HistoryStatus};
pub use pagination::{PageRequest, PageResponse, PaginationError, Sort, SortDirection};
