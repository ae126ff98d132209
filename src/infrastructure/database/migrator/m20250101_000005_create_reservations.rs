//! Create reservations table
//!
//! A passenger books a given travel at most once.

use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_travels::Travels;
use super::m20250101_000004_create_passengers::Passengers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::Uuid).string().not_null().unique_key())
                    .col(ColumnDef::new(Reservations::TravelId).big_integer().not_null())
                    .col(ColumnDef::new(Reservations::PassengerId).big_integer().not_null())
                    .col(ColumnDef::new(Reservations::Review).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Reservations::BookingConfirmed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Reservations::Rating)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Reservations::Rating).between(0, 5)),
                    )
                    .col(
                        ColumnDef::new(Reservations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::UpdatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Reservations::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_travel")
                            .from(Reservations::Table, Reservations::TravelId)
                            .to(Travels::Table, Travels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_passenger")
                            .from(Reservations::Table, Reservations::PassengerId)
                            .to(Passengers::Table, Passengers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_travel_passenger")
                    .table(Reservations::Table)
                    .col(Reservations::TravelId)
                    .col(Reservations::PassengerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Reservations {
    Table,
    Id,
    Uuid,
    TravelId,
    PassengerId,
    Review,
    BookingConfirmed,
    Rating,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
