//! SeaORM implementation of PortalRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::portal::PortalRepository;
use crate::domain::{DomainError, DomainResult, Portal, PortalContact, SocialMediaAccount};
use crate::infrastructure::database::entities::{portal, social_media_account};

pub struct SeaOrmPortalRepository {
    db: DatabaseConnection,
}

impl SeaOrmPortalRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: portal::Model) -> Portal {
    Portal {
        id: m.id,
        name: m.name,
        address: m.address,
        email: m.email,
        mobile_phone: m.mobile_phone,
        theme_color: m.theme_color,
        is_active: m.is_active,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

#[async_trait]
impl PortalRepository for SeaOrmPortalRepository {
    async fn find_active(&self) -> DomainResult<Option<PortalContact>> {
        let Some(model) = portal::Entity::find()
            .filter(portal::Column::IsActive.eq(true))
            .order_by_asc(portal::Column::Name)
            .order_by_asc(portal::Column::Id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let accounts = social_media_account::Entity::find()
            .filter(social_media_account::Column::PortalId.eq(model.id))
            .order_by_asc(social_media_account::Column::Name)
            .order_by_asc(social_media_account::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(Some(PortalContact {
            portal: model_to_domain(model),
            social_media_accounts: accounts
                .into_iter()
                .map(|a| SocialMediaAccount {
                    name: a.name,
                    url: a.url,
                })
                .collect(),
        }))
    }
}
