//! Public pages: overview, listings, travel detail and galleries

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
