//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::portal::PortalRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::ReservationRepository;
use crate::domain::staff::StaffRepository;
use crate::domain::travel::TravelRepository;

use super::portal_repository::SeaOrmPortalRepository;
use super::reservation_repository::SeaOrmReservationRepository;
use super::staff_repository::SeaOrmStaffRepository;
use super::travel_repository::SeaOrmTravelRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let portal = repos.portals().find_active().await?;
/// let travels = repos.travels().find_in_window(TravelWindow::Upcoming, today, Some(9)).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    travels: SeaOrmTravelRepository,
    reservations: SeaOrmReservationRepository,
    portals: SeaOrmPortalRepository,
    staff: SeaOrmStaffRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            travels: SeaOrmTravelRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db.clone()),
            portals: SeaOrmPortalRepository::new(db.clone()),
            staff: SeaOrmStaffRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn travels(&self) -> &dyn TravelRepository {
        &self.travels
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }

    fn portals(&self) -> &dyn PortalRepository {
        &self.portals
    }

    fn staff(&self) -> &dyn StaffRepository {
        &self.staff
    }
}
