//! Reservation entity
//!
//! One row per (travel, passenger) pair.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(unique)]
    pub uuid: String,

    pub travel_id: i64,
    pub passenger_id: i64,

    #[sea_orm(column_type = "Text")]
    pub review: String,

    pub booking_confirmed: bool,

    /// 0..=5
    pub rating: i32,

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
    #[sea_orm(
        belongs_to = "super::passenger::Entity",
        from = "Column::PassengerId",
        to = "super::passenger::Column::Id"
    )]
    Passenger,
}

impl Related<super::travel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Travel.def()
    }
}

impl Related<super::passenger::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Passenger.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
