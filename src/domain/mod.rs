pub mod passenger;
pub mod portal;
pub mod repositories;
pub mod reservation;
pub mod staff;
pub mod travel;

// Re-export commonly used types
pub use passenger::Passenger;
pub use portal::{Portal, PortalContact, SocialMediaAccount};
pub use repositories::{DomainResult, RepositoryProvider};
pub use reservation::{Rating, Reservation, TravelerReview};
pub use travel::{AnnotatedTravel, Availability, Travel, TravelDestination, TravelImage, TravelWindow};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
