//! Create travel_images and travel_destinations tables

use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_travels::Travels;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TravelImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TravelImages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TravelImages::Uuid).string().not_null().unique_key())
                    .col(ColumnDef::new(TravelImages::TravelId).big_integer().not_null())
                    .col(ColumnDef::new(TravelImages::Image).string().not_null())
                    .col(
                        ColumnDef::new(TravelImages::IsGalleryImage)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(TravelImages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TravelImages::UpdatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(TravelImages::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_travel_images_travel")
                            .from(TravelImages::Table, TravelImages::TravelId)
                            .to(Travels::Table, Travels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_travel_images_travel")
                    .table(TravelImages::Table)
                    .col(TravelImages::TravelId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TravelDestinations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TravelDestinations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TravelDestinations::Uuid)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(TravelDestinations::TravelId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TravelDestinations::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(TravelDestinations::StartDate).date().not_null())
                    .col(ColumnDef::new(TravelDestinations::EndDate).date().not_null())
                    .col(ColumnDef::new(TravelDestinations::Image).string().not_null())
                    .col(
                        ColumnDef::new(TravelDestinations::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(TravelDestinations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TravelDestinations::UpdatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(TravelDestinations::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_travel_destinations_travel")
                            .from(TravelDestinations::Table, TravelDestinations::TravelId)
                            .to(Travels::Table, Travels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TravelDestinations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TravelImages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TravelImages {
    Table,
    Id,
    Uuid,
    TravelId,
    Image,
    IsGalleryImage,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum TravelDestinations {
    Table,
    Id,
    Uuid,
    TravelId,
    Name,
    StartDate,
    EndDate,
    Image,
    Description,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
