pub mod dto;
pub mod handlers;

pub use dto::HistoryDto;
pub use handlers::*;
