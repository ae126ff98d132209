//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::portal::PortalRepository;
use super::reservation::ReservationRepository;
use super::staff::StaffRepository;
use super::travel::TravelRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let portal = repos.portals().find_active().await?;
///     let travel = repos.travels().find_by_uuid(uuid).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn travels(&self) -> &dyn TravelRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
    fn portals(&self) -> &dyn PortalRepository;
    fn staff(&self) -> &dyn StaffRepository;
}
