//! Passenger entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "passengers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(unique)]
    pub uuid: String,

    pub first_name: String,
    pub last_name: String,
    pub phone: String,

    #[sea_orm(nullable)]
    pub email: Option<String>,

    /// Media path of the passenger photo
    #[sea_orm(nullable)]
    pub photo: Option<String>,

    pub created_at: DateTimeUtc,
    #[sea_orm(nullable)]
    pub updated_at: Option<DateTimeUtc>,
    #[sea_orm(nullable)]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservations,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
