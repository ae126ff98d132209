//! Infrastructure layer - external concerns

pub mod database;
pub mod mail;
pub mod storage;

pub use database::{init_database, run_migrations, DatabaseConfig, SeaOrmRepositoryProvider};
pub use mail::{LogMailSender, OutboxMailSender};
pub use storage::InMemoryStorage;
