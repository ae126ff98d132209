//! Reservation repository interface

use async_trait::async_trait;

use super::model::TravelerReview;
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Reviews of confirmed bookings that carry review text.
    async fn published_reviews(&self) -> DomainResult<Vec<TravelerReview>>;
}
