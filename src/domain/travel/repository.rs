//! Travel repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::availability::AnnotatedTravel;
use super::model::{Travel, TravelDestination, TravelImage, TravelWindow};
use crate::domain::DomainResult;

#[async_trait]
pub trait TravelRepository: Send + Sync {
    /// Travels admitted by `window` on `today`, newest start date first,
    /// each annotated with its confirmed-reservation count.
    async fn find_in_window(
        &self,
        window: TravelWindow,
        today: NaiveDate,
        limit: Option<u64>,
    ) -> DomainResult<Vec<AnnotatedTravel>>;

    /// A single travel by uuid, only if `window` admits it on `today`.
    async fn find_in_window_by_uuid(
        &self,
        window: TravelWindow,
        uuid: &str,
        today: NaiveDate,
    ) -> DomainResult<Option<AnnotatedTravel>>;

    /// A travel by uuid regardless of its state.
    async fn find_by_uuid(&self, uuid: &str) -> DomainResult<Option<Travel>>;

    /// Images of a travel, newest first. `gallery_only` keeps gallery-flagged images.
    async fn images(&self, travel_id: i64, gallery_only: bool) -> DomainResult<Vec<TravelImage>>;

    /// Itinerary stops ordered by start date.
    async fn destinations(&self, travel_id: i64) -> DomainResult<Vec<TravelDestination>>;
}
