//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_portals;
mod m20250101_000002_create_travels;
mod m20250101_000003_create_travel_media;
mod m20250101_000004_create_passengers;
mod m20250101_000005_create_reservations;
mod m20250101_000006_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_portals::Migration),
            Box::new(m20250101_000002_create_travels::Migration),
            Box::new(m20250101_000003_create_travel_media::Migration),
            Box::new(m20250101_000004_create_passengers::Migration),
            Box::new(m20250101_000005_create_reservations::Migration),
            Box::new(m20250101_000006_create_users::Migration),
        ]
    }
}
