//! HTTP REST API interfaces
//!
//! - `common`: envelopes, the validated query extractor and pagination params
//! - `modules`: request handlers per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;
