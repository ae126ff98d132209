//! Typed payloads handed to the presentation layer, one per view.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::gallery_columns::GALLERY_COLUMNS;
use super::year_groups::{Dated, YearGroup, YearGroups};

/// Card of an upcoming travel (overview and `/travels/` listing).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TravelCard {
    pub uuid: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub highlight_feature: String,
    /// Absolute media url of the cover image
    pub cover_image: String,
    pub all_inclusive: bool,
    pub is_travel_full: bool,
    pub year: i32,
}

impl Dated for TravelCard {
    fn start_date(&self) -> NaiveDate {
        self.start_date
    }
}

/// Card of a finished travel (`/gallery/` listing).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GalleryCard {
    pub uuid: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub cover_image: String,
    pub year: i32,
}

impl Dated for GalleryCard {
    fn start_date(&self) -> NaiveDate {
        self.start_date
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReviewCard {
    pub full_name: String,
    pub review: String,
    pub photo: Option<String>,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Overview {
    pub travels: Vec<TravelCard>,
    pub reviews: Vec<ReviewCard>,
}

/// Year-grouped listing plus the year index.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct YearListing<T> {
    pub travels: Vec<YearGroup<T>>,
    pub years: Vec<i32>,
}

impl<T> From<YearGroups<T>> for YearListing<T> {
    fn from(groups: YearGroups<T>) -> Self {
        let years = groups.years();
        Self {
            travels: groups.into_groups(),
            years,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DestinationView {
    pub name: String,
    /// e.g. `Del 01 al 03 de septiembre`
    pub date: String,
    pub image: String,
    pub description: String,
}

/// Detail page of an upcoming travel.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TravelDetail {
    pub uuid: String,
    pub name: String,
    /// e.g. `Del 05 de marzo al 12 de marzo`
    pub date: String,
    pub description: String,
    pub highlight_feature: String,
    pub cover_image: String,
    /// Remaining seats; negative when overbooked
    pub counter: i64,
    pub inclusions: Vec<String>,
    pub restrictions: Vec<String>,
    pub all_inclusive: bool,
    pub is_travel_full: bool,
    pub travel_images: Vec<String>,
    pub travel_destinations: Vec<DestinationView>,
}

/// Photo gallery of a finished travel.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TravelGallery {
    pub uuid: String,
    pub name: String,
    /// e.g. `05 de marzo de 2024`
    pub start_date: String,
    pub cover_image: String,
    /// Gallery images dealt into three columns
    #[schema(value_type = Vec<Vec<String>>)]
    pub travel_images: [Vec<String>; GALLERY_COLUMNS],
    /// External gallery url, empty when none
    pub url: String,
}
