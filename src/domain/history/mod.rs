pub mod model;
pub mod repository;

pub use model::{History, HistoryStatus};
pub use repository::{HistoryPage, HistoryRepository};
