//! Capacity bookkeeping for a travel.

use super::model::Travel;

/// Confirmed bookings measured against a travel's capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    pub capacity: u32,
    /// Reservations with `booking_confirmed = true`.
    pub confirmed_count: i64,
    pub manual_full: bool,
}

impl Availability {
    pub fn new(capacity: u32, confirmed_count: i64, manual_full: bool) -> Self {
        Self {
            capacity,
            confirmed_count,
            manual_full,
        }
    }

    pub fn for_travel(travel: &Travel, confirmed_count: i64) -> Self {
        Self::new(travel.max_passengers, confirmed_count, travel.is_capacity_full)
    }

    /// Full when the confirmed bookings reach capacity, or when staff forced it.
    pub fn is_full(&self) -> bool {
        self.confirmed_count >= i64::from(self.capacity) || self.manual_full
    }

    /// Seats left. Not clamped: overbooked travels report a negative count.
    pub fn remaining_seats(&self) -> i64 {
        i64::from(self.capacity) - self.confirmed_count
    }
}

/// A travel together with its computed availability.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedTravel {
    pub travel: Travel,
    pub availability: Availability,
}

impl AnnotatedTravel {
    pub fn new(travel: Travel, confirmed_count: i64) -> Self {
        let availability = Availability::for_travel(&travel, confirmed_count);
        Self {
            travel,
            availability,
        }
    }

    pub fn is_full(&self) -> bool {
        self.availability.is_full()
    }
}
