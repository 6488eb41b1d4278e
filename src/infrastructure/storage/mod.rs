//! Storage implementations

mod memory;

pub use memory::{InMemoryHistoryRepository, SORTABLE_COLUMNS};
