//! HTTP interface
//!
//! - `common`: response envelope, error mapping and extractors
//! - `modules`: handlers and DTOs per page group
//! - `router`: router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_router, ApiDoc, AppState};
