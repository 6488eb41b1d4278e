//! # Cursor Pager
//!
//! Cursor-based pagination for list-returning HTTP APIs, plus a small REST
//! service that serves job run histories through it.
//!
//! ## Architecture
//!
//! - **domain**: pagination value types (`PageRequest`, `PageResponse`,
//!   `Sort`), the `History` record and its repository port
//! - **infrastructure**: in-memory history storage
//! - **interfaces**: REST API with Swagger documentation
//! - **config** / **server**: TOML configuration and process bootstrap

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;

pub use config::{default_config_path, AppConfig};

// Re-export the pagination core for easy access
pub use domain::pagination::{
    Cursor, PageRequest, PageResponse, PaginationError, Sort, SortDirection, SortKey,
};

// Re-export API router
pub use interfaces::http::create_api_router;
