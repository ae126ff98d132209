//! Portal repository interface

use async_trait::async_trait;

use super::model::PortalContact;
use crate::domain::DomainResult;

#[async_trait]
pub trait PortalRepository: Send + Sync {
    /// First active portal (by name) with its social media accounts.
    async fn find_active(&self) -> DomainResult<Option<PortalContact>>;
}
