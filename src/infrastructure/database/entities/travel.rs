//! Travel entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "travels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(unique)]
    pub uuid: String,

    pub name: String,
    pub highlight_feature: String,
    pub start_date: Date,
    pub end_date: Date,
    pub is_active: bool,
    pub all_inclusive: bool,
    pub is_capacity_full: bool,
    pub cancelled: bool,
    pub max_passengers: i32,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub cover_image: String,

    /// JSON array of strings
    #[sea_orm(column_type = "Text")]
    pub inclusions: String,

    /// JSON array of strings
    #[sea_orm(column_type = "Text")]
    pub restrictions: String,

    /// External gallery url, empty when none
    pub url: String,

    pub created_at: DateTimeUtc,
    #[sea_orm(nullable)]
    pub updated_at: Option<DateTimeUtc>,
    #[sea_orm(nullable)]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::travel_image::Entity")]
    TravelImages,
    #[sea_orm(has_many = "super::travel_destination::Entity")]
    TravelDestinations,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservations,
}

impl Related<super::travel_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TravelImages.def()
    }
}

impl Related<super::travel_destination::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TravelDestinations.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
