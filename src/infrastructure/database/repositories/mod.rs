//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod portal_repository;
pub mod repository_provider;
pub mod reservation_repository;
pub mod staff_repository;
pub mod travel_repository;


pub use repository_provider::SeaOrmRepositoryProvider;
