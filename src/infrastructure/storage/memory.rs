//! In-memory storage implementation

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;

use crate::domain::portal::PortalRepository;
use crate::domain::reservation::ReservationRepository;
use crate::domain::staff::StaffRepository;
use crate::domain::travel::TravelRepository;
use crate::domain::{
    AnnotatedTravel, DomainError, DomainResult, Passenger, Portal, PortalContact,
    RepositoryProvider, Reservation, SocialMediaAccount, Travel, TravelDestination, TravelImage,
    TravelWindow, TravelerReview,
};

/// In-memory storage for development and testing
pub struct InMemoryStorage {
    travels: DashMap<i64, Travel>,
    images: DashMap<i64, TravelImage>,
    destinations: DashMap<i64, TravelDestination>,
    passengers: DashMap<i64, Passenger>,
    reservations: DashMap<i64, Reservation>,
    portals: DashMap<i64, Portal>,
    social_accounts: DashMap<i64, (i64, SocialMediaAccount)>,
    staff_emails: DashMap<i64, String>,
    sequence: AtomicI64,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            travels: DashMap::new(),
            images: DashMap::new(),
            destinations: DashMap::new(),
            passengers: DashMap::new(),
            reservations: DashMap::new(),
            portals: DashMap::new(),
            social_accounts: DashMap::new(),
            staff_emails: DashMap::new(),
            sequence: AtomicI64::new(1),
        }
    }

    fn next_id(&self) -> i64 {
        self.sequence.fetch_add(1, Ordering::SeqCst)
    }

    // ── Seeding ────────────────────────────────────────────────

    pub fn insert_travel(&self, travel: Travel) {
        self.travels.insert(travel.id, travel);
    }

    pub fn insert_image(&self, image: TravelImage) {
        self.images.insert(image.id, image);
    }

    pub fn insert_destination(&self, destination: TravelDestination) {
        self.destinations.insert(destination.id, destination);
    }

    pub fn insert_passenger(&self, passenger: Passenger) {
        self.passengers.insert(passenger.id, passenger);
    }

    /// Rejects a second reservation for the same (travel, passenger) pair.
    pub fn insert_reservation(&self, reservation: Reservation) -> DomainResult<()> {
        let duplicate = self.reservations.iter().any(|r| {
            r.id != reservation.id
                && r.travel_id == reservation.travel_id
                && r.passenger_id == reservation.passenger_id
        });
        if duplicate {
            return Err(DomainError::Validation(format!(
                "passenger {} already holds a reservation for travel {}",
                reservation.passenger_id, reservation.travel_id
            )));
        }
        self.reservations.insert(reservation.id, reservation);
        Ok(())
    }

    pub fn insert_portal(&self, portal: Portal) {
        self.portals.insert(portal.id, portal);
    }

    pub fn add_social_account(&self, portal_id: i64, account: SocialMediaAccount) {
        let id = self.next_id();
        self.social_accounts.insert(id, (portal_id, account));
    }

    pub fn add_staff_email(&self, email: impl Into<String>) {
        let id = self.next_id();
        self.staff_emails.insert(id, email.into());
    }

    fn annotate(&self, travel: Travel) -> AnnotatedTravel {
        let confirmed = self
            .reservations
            .iter()
            .filter(|r| r.travel_id == travel.id && r.booking_confirmed)
            .count() as i64;
        AnnotatedTravel::new(travel, confirmed)
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryStorage {
    fn travels(&self) -> &dyn TravelRepository {
        self
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        self
    }

    fn portals(&self) -> &dyn PortalRepository {
        self
    }

    fn staff(&self) -> &dyn StaffRepository {
        self
    }
}

#[async_trait]
impl TravelRepository for InMemoryStorage {
    async fn find_in_window(
        &self,
        window: TravelWindow,
        today: NaiveDate,
        limit: Option<u64>,
    ) -> DomainResult<Vec<AnnotatedTravel>> {
        let mut travels: Vec<Travel> = self
            .travels
            .iter()
            .filter(|t| window.admits(t.value(), today))
            .map(|t| t.value().clone())
            .collect();
        travels.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(b.id.cmp(&a.id)));
        if let Some(limit) = limit {
            travels.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(travels.into_iter().map(|t| self.annotate(t)).collect())
    }

    async fn find_in_window_by_uuid(
        &self,
        window: TravelWindow,
        uuid: &str,
        today: NaiveDate,
    ) -> DomainResult<Option<AnnotatedTravel>> {
        let found = self
            .travels
            .iter()
            .find(|t| t.uuid == uuid && window.admits(t.value(), today))
            .map(|t| t.value().clone());
        Ok(found.map(|t| self.annotate(t)))
    }

    async fn find_by_uuid(&self, uuid: &str) -> DomainResult<Option<Travel>> {
        Ok(self
            .travels
            .iter()
            .find(|t| t.uuid == uuid)
            .map(|t| t.value().clone()))
    }

    async fn images(&self, travel_id: i64, gallery_only: bool) -> DomainResult<Vec<TravelImage>> {
        let mut images: Vec<TravelImage> = self
            .images
            .iter()
            .filter(|i| i.travel_id == travel_id && (!gallery_only || i.is_gallery_image))
            .map(|i| i.value().clone())
            .collect();
        images.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(images)
    }

    async fn destinations(&self, travel_id: i64) -> DomainResult<Vec<TravelDestination>> {
        let mut destinations: Vec<TravelDestination> = self
            .destinations
            .iter()
            .filter(|d| d.travel_id == travel_id)
            .map(|d| d.value().clone())
            .collect();
        destinations.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.id.cmp(&b.id)));
        Ok(destinations)
    }
}

#[async_trait]
impl ReservationRepository for InMemoryStorage {
    async fn published_reviews(&self) -> DomainResult<Vec<TravelerReview>> {
        let mut reservations: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|r| r.booking_confirmed && r.has_review())
            .map(|r| r.value().clone())
            .collect();
        reservations.sort_by_key(|r| r.id);

        Ok(reservations
            .into_iter()
            .filter_map(|r| {
                let passenger = self.passengers.get(&r.passenger_id)?;
                Some(TravelerReview {
                    full_name: passenger.full_name(),
                    review: r.review,
                    photo: passenger.photo.clone(),
                    rating: r.rating,
                })
            })
            .collect())
    }
}

#[async_trait]
impl PortalRepository for InMemoryStorage {
    async fn find_active(&self) -> DomainResult<Option<PortalContact>> {
        let portal = self
            .portals
            .iter()
            .filter(|p| p.is_active)
            .map(|p| p.value().clone())
            .min_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        let Some(portal) = portal else {
            return Ok(None);
        };

        let mut accounts: Vec<(i64, SocialMediaAccount)> = self
            .social_accounts
            .iter()
            .filter(|entry| entry.value().0 == portal.id)
            .map(|entry| (*entry.key(), entry.value().1.clone()))
            .collect();
        accounts.sort_by(|(a_id, a), (b_id, b)| a.name.cmp(&b.name).then(a_id.cmp(b_id)));

        Ok(Some(PortalContact {
            portal,
            social_media_accounts: accounts.into_iter().map(|(_, a)| a).collect(),
        }))
    }
}

#[async_trait]
impl StaffRepository for InMemoryStorage {
    async fn contact_emails(&self) -> DomainResult<Vec<String>> {
        let mut emails: Vec<(i64, String)> = self
            .staff_emails
            .iter()
            .map(|e| (*e.key(), e.value().clone()))
            .collect();
        emails.sort_by_key(|(id, _)| *id);
        Ok(emails.into_iter().map(|(_, email)| email).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::travel::model::tests::{date, sample_travel};
    use crate::domain::Rating;

    fn reservation(id: i64, travel_id: i64, passenger_id: i64, confirmed: bool) -> Reservation {
        Reservation {
            id,
            uuid: format!("r-{}", id),
            travel_id,
            passenger_id,
            review: String::new(),
            booking_confirmed: confirmed,
            rating: Rating::default(),
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn only_confirmed_reservations_count() {
        let storage = InMemoryStorage::new();
        storage.insert_travel(sample_travel());
        storage.insert_reservation(reservation(1, 1, 1, true)).unwrap();
        storage.insert_reservation(reservation(2, 1, 2, false)).unwrap();
        storage.insert_reservation(reservation(3, 1, 3, true)).unwrap();

        let annotated = storage
            .find_in_window(TravelWindow::Upcoming, date(2030, 1, 1), None)
            .await
            .unwrap();
        assert_eq!(annotated[0].availability.confirmed_count, 2);
    }

    #[tokio::test]
    async fn duplicate_pair_is_rejected() {
        let storage = InMemoryStorage::new();
        storage.insert_reservation(reservation(1, 1, 7, true)).unwrap();
        assert!(storage.insert_reservation(reservation(2, 1, 7, false)).is_err());
    }

    #[tokio::test]
    async fn window_listing_is_newest_first_and_limited() {
        let storage = InMemoryStorage::new();
        for (id, month) in [(1, 3), (2, 6), (3, 1)] {
            let mut travel = sample_travel();
            travel.id = id;
            travel.uuid = format!("t-{}", id);
            travel.start_date = date(2030, month, 1);
            travel.end_date = date(2030, month, 10);
            storage.insert_travel(travel);
        }

        let all = storage
            .find_in_window(TravelWindow::Upcoming, date(2029, 1, 1), None)
            .await
            .unwrap();
        let ids: Vec<i64> = all.iter().map(|t| t.travel.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);

        let limited = storage
            .find_in_window(TravelWindow::Upcoming, date(2029, 1, 1), Some(2))
            .await
            .unwrap();
        assert_eq!(limited.len(), 2);
    }
}
