//! Reservation aggregate
//!
//! Contains the Reservation entity, reviews, and repository interface.

pub mod model;
pub mod repository;

pub use model::{Rating, Reservation, TravelerReview};
pub use repository::ReservationRepository;
