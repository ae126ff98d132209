//! Portal entity (site identity and contact data)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(unique)]
    pub uuid: String,

    pub name: String,
    pub address: String,
    pub email: String,
    pub mobile_phone: String,

    #[sea_orm(nullable)]
    pub theme_color: Option<String>,

    pub is_active: bool,

    pub created_at: DateTimeUtc,
    #[sea_orm(nullable)]
    pub updated_at: Option<DateTimeUtc>,
    #[sea_orm(nullable)]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::social_media_account::Entity")]
    SocialMediaAccounts,
}

impl Related<super::social_media_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialMediaAccounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
