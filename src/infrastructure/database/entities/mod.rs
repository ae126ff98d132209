//! Database entities module

pub mod passenger;
pub mod portal;
pub mod reservation;
pub mod social_media_account;
pub mod travel;
pub mod travel_destination;
pub mod travel_image;
pub mod user;

pub use passenger::Entity as Passenger;
pub use portal::Entity as Portal;
pub use reservation::Entity as Reservation;
pub use social_media_account::Entity as SocialMediaAccount;
pub use travel::Entity as Travel;
pub use travel_destination::Entity as TravelDestination;
pub use travel_image::Entity as TravelImage;
pub use user::Entity as User;
