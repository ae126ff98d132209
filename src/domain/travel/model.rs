//! Travel domain entities

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// A bookable journey offering.
#[derive(Debug, Clone, PartialEq)]
pub struct Travel {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    /// Short badge text shown on cards (at most 25 characters).
    pub highlight_feature: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub all_inclusive: bool,
    /// Manual override forcing the travel to display as fully booked.
    pub is_capacity_full: bool,
    pub cancelled: bool,
    /// Capacity (maximum number of passengers).
    pub max_passengers: u32,
    pub description: String,
    /// Media path of the cover image, relative to the media root.
    pub cover_image: String,
    pub inclusions: Vec<String>,
    pub restrictions: Vec<String>,
    /// External gallery url; empty when none was published.
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Travel {
    pub fn year(&self) -> i32 {
        self.start_date.year()
    }

    pub fn has_external_gallery(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

/// Source filter for travel listings.
///
/// Both listings share one grouping algorithm and differ only in which
/// travels they admit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelWindow {
    /// Not cancelled, active, starting strictly after `today`.
    Upcoming,
    /// Not cancelled, ended strictly before `today` (active or not).
    Past,
}

impl TravelWindow {
    pub fn admits(&self, travel: &Travel, today: NaiveDate) -> bool {
        match self {
            Self::Upcoming => !travel.cancelled && travel.is_active && travel.start_date > today,
            Self::Past => !travel.cancelled && travel.end_date < today,
        }
    }
}

/// Image attached to a travel.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelImage {
    pub id: i64,
    pub travel_id: i64,
    pub image: String,
    pub is_gallery_image: bool,
}

/// A stop of the itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelDestination {
    pub id: i64,
    pub travel_id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub image: String,
    pub description: String,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub(crate) fn sample_travel() -> Travel {
        Travel {
            id: 1,
            uuid: "8f0e3a52-6d38-4c55-9a43-1b1f1d7c9e10".to_string(),
            name: "Machu Picchu".to_string(),
            highlight_feature: "Nuevo".to_string(),
            start_date: date(2030, 3, 5),
            end_date: date(2030, 3, 12),
            is_active: true,
            all_inclusive: false,
            is_capacity_full: false,
            cancelled: false,
            max_passengers: 10,
            description: "Cusco y el Valle Sagrado".to_string(),
            cover_image: "travel/travels/machu.jpg".to_string(),
            inclusions: vec!["Vuelos".to_string()],
            restrictions: vec![],
            url: String::new(),
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
        }
    }

    #[test]
    fn upcoming_window_requires_active_not_cancelled_future_start() {
        let today = date(2030, 1, 1);
        let travel = sample_travel();
        assert!(TravelWindow::Upcoming.admits(&travel, today));

        let mut cancelled = travel.clone();
        cancelled.cancelled = true;
        assert!(!TravelWindow::Upcoming.admits(&cancelled, today));

        let mut inactive = travel.clone();
        inactive.is_active = false;
        assert!(!TravelWindow::Upcoming.admits(&inactive, today));

        // starting today is not "after today"
        assert!(!TravelWindow::Upcoming.admits(&travel, travel.start_date));
    }

    #[test]
    fn past_window_ignores_active_flag() {
        let today = date(2031, 1, 1);
        let mut travel = sample_travel();
        travel.is_active = false;
        assert!(TravelWindow::Past.admits(&travel, today));
        assert!(!TravelWindow::Past.admits(&travel, travel.end_date));

        travel.cancelled = true;
        assert!(!TravelWindow::Past.admits(&travel, today));
    }

    #[test]
    fn blank_url_is_not_an_external_gallery() {
        let mut travel = sample_travel();
        assert!(!travel.has_external_gallery());
        travel.url = "   ".into();
        assert!(!travel.has_external_gallery());
        travel.url = "https://photos.example.com/machu".into();
        assert!(travel.has_external_gallery());
        assert_eq!(travel.year(), 2030);
    }
}
