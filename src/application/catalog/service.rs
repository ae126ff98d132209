//! Travel catalog service
//!
//! Builds the page projections for the overview, listings, detail and
//! gallery views on top of the repositories.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use super::dates;
use super::gallery_columns::round_robin_columns;
use super::projections::{
    DestinationView, GalleryCard, Overview, ReviewCard, TravelCard, TravelDetail, TravelGallery,
    YearListing,
};
use super::year_groups::YearGroups;
use crate::domain::{
    AnnotatedTravel, DomainError, DomainResult, RepositoryProvider, Travel, TravelDestination,
    TravelWindow, TravelerReview,
};

/// Prefixes stored media paths with the public media url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrls {
    base: String,
}

impl MediaUrls {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

pub struct TravelCatalogService {
    repos: Arc<dyn RepositoryProvider>,
    media: MediaUrls,
    overview_limit: u64,
}

impl TravelCatalogService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, media: MediaUrls, overview_limit: u64) -> Self {
        Self {
            repos,
            media,
            overview_limit,
        }
    }

    /// Landing page: the next upcoming travels and published reviews.
    pub async fn overview(&self, today: NaiveDate) -> DomainResult<Overview> {
        let travels = self
            .repos
            .travels()
            .find_in_window(TravelWindow::Upcoming, today, Some(self.overview_limit))
            .await?;
        let reviews = self.repos.reservations().published_reviews().await?;

        Ok(Overview {
            travels: travels.iter().map(|t| self.travel_card(t)).collect(),
            reviews: reviews.into_iter().map(|r| self.review_card(r)).collect(),
        })
    }

    /// Upcoming travels grouped by start year.
    pub async fn upcoming_by_year(&self, today: NaiveDate) -> DomainResult<YearListing<TravelCard>> {
        let travels = self
            .repos
            .travels()
            .find_in_window(TravelWindow::Upcoming, today, None)
            .await?;
        let groups: YearGroups<TravelCard> = travels.iter().map(|t| self.travel_card(t)).collect();
        debug!(years = ?groups.years(), "Grouped upcoming travels");
        Ok(groups.into())
    }

    /// Finished travels grouped by start year.
    pub async fn past_by_year(&self, today: NaiveDate) -> DomainResult<YearListing<GalleryCard>> {
        let travels = self
            .repos
            .travels()
            .find_in_window(TravelWindow::Past, today, None)
            .await?;
        let groups: YearGroups<GalleryCard> =
            travels.iter().map(|t| self.gallery_card(&t.travel)).collect();
        debug!(years = ?groups.years(), "Grouped past travels");
        Ok(groups.into())
    }

    /// Detail of an upcoming travel; `NotFound` when it is absent, cancelled,
    /// inactive or already started.
    pub async fn travel_detail(&self, uuid: &str, today: NaiveDate) -> DomainResult<TravelDetail> {
        let annotated = self
            .repos
            .travels()
            .find_in_window_by_uuid(TravelWindow::Upcoming, uuid, today)
            .await?
            .ok_or_else(|| DomainError::not_found("Travel", "uuid", uuid))?;

        let travel_id = annotated.travel.id;
        let images = self.repos.travels().images(travel_id, false).await?;
        let destinations = self.repos.travels().destinations(travel_id).await?;

        let AnnotatedTravel {
            travel,
            availability,
        } = annotated;

        Ok(TravelDetail {
            date: dates::travel_range(travel.start_date, travel.end_date),
            cover_image: self.media.url(&travel.cover_image),
            counter: availability.remaining_seats(),
            is_travel_full: availability.is_full(),
            travel_images: images.iter().map(|i| self.media.url(&i.image)).collect(),
            travel_destinations: destinations
                .into_iter()
                .map(|d| self.destination_view(d))
                .collect(),
            uuid: travel.uuid,
            name: travel.name,
            description: travel.description,
            highlight_feature: travel.highlight_feature,
            inclusions: travel.inclusions,
            restrictions: travel.restrictions,
            all_inclusive: travel.all_inclusive,
        })
    }

    /// Gallery of a finished travel.
    ///
    /// `NotFound` when the travel is absent, cancelled or not over yet;
    /// `GalleryNotReady` when it has neither gallery images nor an external url.
    pub async fn travel_gallery(&self, uuid: &str, today: NaiveDate) -> DomainResult<TravelGallery> {
        let travel = self
            .repos
            .travels()
            .find_in_window_by_uuid(TravelWindow::Past, uuid, today)
            .await?
            .ok_or_else(|| DomainError::not_found("Travel", "uuid", uuid))?
            .travel;

        let images = self.repos.travels().images(travel.id, true).await?;
        if images.is_empty() && !travel.has_external_gallery() {
            return Err(DomainError::GalleryNotReady(travel.uuid));
        }

        let urls = images.iter().map(|i| self.media.url(&i.image));
        Ok(TravelGallery {
            start_date: dates::long_date(travel.start_date),
            cover_image: self.media.url(&travel.cover_image),
            travel_images: round_robin_columns(urls),
            uuid: travel.uuid,
            name: travel.name,
            url: travel.url,
        })
    }

    /// Any travel by uuid, regardless of availability (used for inquiries).
    pub async fn find_travel(&self, uuid: &str) -> DomainResult<Travel> {
        self.repos
            .travels()
            .find_by_uuid(uuid)
            .await?
            .ok_or_else(|| DomainError::not_found("Travel", "uuid", uuid))
    }

    // ── Projection helpers ─────────────────────────────────────

    fn travel_card(&self, annotated: &AnnotatedTravel) -> TravelCard {
        let travel = &annotated.travel;
        TravelCard {
            uuid: travel.uuid.clone(),
            name: travel.name.clone(),
            start_date: travel.start_date,
            highlight_feature: travel.highlight_feature.clone(),
            cover_image: self.media.url(&travel.cover_image),
            all_inclusive: travel.all_inclusive,
            is_travel_full: annotated.is_full(),
            year: travel.year(),
        }
    }

    fn gallery_card(&self, travel: &Travel) -> GalleryCard {
        GalleryCard {
            uuid: travel.uuid.clone(),
            name: travel.name.clone(),
            start_date: travel.start_date,
            cover_image: self.media.url(&travel.cover_image),
            year: travel.year(),
        }
    }

    fn review_card(&self, review: TravelerReview) -> ReviewCard {
        ReviewCard {
            full_name: review.full_name,
            review: review.review,
            photo: review.photo.as_deref().map(|p| self.media.url(p)),
            rating: review.rating.value(),
        }
    }

    fn destination_view(&self, destination: TravelDestination) -> DestinationView {
        DestinationView {
            date: dates::destination_range(destination.start_date, destination.end_date),
            image: self.media.url(&destination.image),
            name: destination.name,
            description: destination.description,
        }
    }
}
