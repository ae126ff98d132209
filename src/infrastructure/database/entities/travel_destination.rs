//! Travel destination (itinerary stop) entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "travel_destinations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(unique)]
    pub uuid: String,

    pub travel_id: i64,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub image: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub created_at: DateTimeUtc,
    #[sea_orm(nullable)]
    pub updated_at: Option<DateTimeUtc>,
    #[sea_orm(nullable)]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::travel::Entity",
        from = "Column::TravelId",
        to = "super::travel::Column::Id"
    )]
    Travel,
}

impl Related<super::travel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Travel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
