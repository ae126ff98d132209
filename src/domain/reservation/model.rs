//! Reservation domain entity

use chrono::{DateTime, Utc};

use crate::domain::{DomainError, DomainResult};

/// Star rating left with a review (0–5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    pub fn new(value: i32) -> DomainResult<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX)
            .map(Self)
            .ok_or_else(|| {
                DomainError::Validation(format!("rating must be between 0 and 5, got {}", value))
            })
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Booking linking one passenger to one travel.
///
/// A (travel, passenger) pair has at most one reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i64,
    pub uuid: String,
    pub travel_id: i64,
    pub passenger_id: i64,
    pub review: String,
    pub booking_confirmed: bool,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn has_review(&self) -> bool {
        !self.review.trim().is_empty()
    }
}

/// A confirmed passenger's review as shown on the overview page.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelerReview {
    pub full_name: String,
    pub review: String,
    /// Media path of the passenger photo.
    pub photo: Option<String>,
    pub rating: Rating,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_accepts_zero_to_five() {
        for v in 0..=5 {
            assert_eq!(Rating::new(v).unwrap().value(), v as u8);
        }
    }

    #[test]
    fn rating_rejects_out_of_range() {
        assert!(matches!(Rating::new(6), Err(DomainError::Validation(_))));
        assert!(matches!(Rating::new(-1), Err(DomainError::Validation(_))));
    }

    #[test]
    fn whitespace_review_is_not_a_review() {
        let reservation = Reservation {
            id: 1,
            uuid: "r-1".into(),
            travel_id: 1,
            passenger_id: 1,
            review: "  \n".into(),
            booking_confirmed: true,
            rating: Rating::default(),
            created_at: Utc::now(),
            deleted_at: None,
        };
        assert!(!reservation.has_review());
    }
}
