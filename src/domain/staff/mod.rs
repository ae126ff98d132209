//! Staff accounts
//!
//! Staff users are managed by the administrative surface; the portal only
//! reads their addresses to forward contact-form messages.

use async_trait::async_trait;

use crate::domain::DomainResult;

#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// Email of every registered staff user, in registration order.
    async fn contact_emails(&self) -> DomainResult<Vec<String>>;
}
