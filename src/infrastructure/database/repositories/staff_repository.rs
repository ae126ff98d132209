//! SeaORM implementation of StaffRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::domain::staff::StaffRepository;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmStaffRepository {
    db: DatabaseConnection,
}

impl SeaOrmStaffRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StaffRepository for SeaOrmStaffRepository {
    async fn contact_emails(&self) -> DomainResult<Vec<String>> {
        // blank addresses are skipped; duplicates are kept
        let emails: Vec<String> = user::Entity::find()
            .select_only()
            .column(user::Column::Email)
            .filter(user::Column::Email.ne(""))
            .order_by_asc(user::Column::Id)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Storage(format!("Database error: {}", e)))?;
        Ok(emails)
    }
}
