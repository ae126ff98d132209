//! # Travel Portal
//!
//! Public site of a travel agency: upcoming trips with live seat
//! availability, year-grouped listings, photo galleries of past trips,
//! a contact form forwarded to staff and WhatsApp inquiry links.
//!
//! ## Architecture
//!
//! - **domain**: entities, availability rules and repository traits
//! - **application**: catalog projections, contact forwarding, outbound ports
//! - **infrastructure**: SeaORM/SQLite persistence, in-memory storage, mail transports
//! - **interfaces**: HTTP router, page handlers and Swagger documentation
//! - **server**: runtime lifecycle and tracing setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use interfaces::create_router;
