//! Create passengers table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Passengers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Passengers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Passengers::Uuid).string().not_null().unique_key())
                    .col(ColumnDef::new(Passengers::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Passengers::LastName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Passengers::Phone)
                            .string_len(20)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Passengers::Email).string())
                    .col(ColumnDef::new(Passengers::Photo).string())
                    .col(
                        ColumnDef::new(Passengers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Passengers::UpdatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Passengers::DeletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Passengers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Passengers {
    Table,
    Id,
    Uuid,
    FirstName,
    LastName,
    Phone,
    Email,
    Photo,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
