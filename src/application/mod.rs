//! Application layer: use cases on top of the domain repositories
//!
//! - `catalog`: overview, listings, detail and gallery projections
//! - `contact`: contact form forwarding and WhatsApp inquiry links
//! - `ports`: outbound interfaces (mail transport)

pub mod catalog;
pub mod contact;
pub mod ports;

pub use catalog::{MediaUrls, TravelCatalogService};
pub use contact::{ContactMessage, ContactService, WhatsappLinks};
