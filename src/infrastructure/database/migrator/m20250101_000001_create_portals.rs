//! Create portals and social_media_accounts tables

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Portals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Portals::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Portals::Uuid).string().not_null().unique_key())
                    .col(ColumnDef::new(Portals::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Portals::Address).string_len(200).not_null())
                    .col(ColumnDef::new(Portals::Email).string().not_null())
                    .col(ColumnDef::new(Portals::MobilePhone).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Portals::ThemeColor)
                            .string_len(20)
                            .default("#fcccca"),
                    )
                    .col(
                        ColumnDef::new(Portals::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Portals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Portals::UpdatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Portals::DeletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SocialMediaAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SocialMediaAccounts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SocialMediaAccounts::Uuid)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(SocialMediaAccounts::PortalId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SocialMediaAccounts::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SocialMediaAccounts::Url).string().not_null())
                    .col(
                        ColumnDef::new(SocialMediaAccounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SocialMediaAccounts::UpdatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(SocialMediaAccounts::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_media_accounts_portal")
                            .from(SocialMediaAccounts::Table, SocialMediaAccounts::PortalId)
                            .to(Portals::Table, Portals::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SocialMediaAccounts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Portals::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Portals {
    Table,
    Id,
    Uuid,
    Name,
    Address,
    Email,
    MobilePhone,
    ThemeColor,
    IsActive,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
pub enum SocialMediaAccounts {
    Table,
    Id,
    Uuid,
    PortalId,
    Name,
    Url,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
