//! Create travels table
//!
//! `inclusions` and `restrictions` hold JSON string arrays.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Travels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Travels::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Travels::Uuid).string().not_null().unique_key())
                    .col(ColumnDef::new(Travels::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Travels::HighlightFeature)
                            .string_len(25)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Travels::StartDate).date().not_null())
                    .col(ColumnDef::new(Travels::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(Travels::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Travels::AllInclusive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Travels::IsCapacityFull)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Travels::Cancelled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Travels::MaxPassengers)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Travels::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Travels::CoverImage).string().not_null())
                    .col(ColumnDef::new(Travels::Inclusions).text().not_null().default("[]"))
                    .col(ColumnDef::new(Travels::Restrictions).text().not_null().default("[]"))
                    .col(ColumnDef::new(Travels::Url).string().not_null().default(""))
                    .col(
                        ColumnDef::new(Travels::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Travels::UpdatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Travels::DeletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_travels_start_date")
                    .table(Travels::Table)
                    .col(Travels::StartDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Travels::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Travels {
    Table,
    Id,
    Uuid,
    Name,
    HighlightFeature,
    StartDate,
    EndDate,
    IsActive,
    AllInclusive,
    IsCapacityFull,
    Cancelled,
    MaxPassengers,
    Description,
    CoverImage,
    Inclusions,
    Restrictions,
    Url,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
