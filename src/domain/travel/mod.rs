//! Travel aggregate
//!
//! Travels, their images and destinations, availability computation and the
//! repository interface.

pub mod availability;
pub mod model;
pub mod repository;

pub use availability::{AnnotatedTravel, Availability};
pub use model::{Travel, TravelDestination, TravelImage, TravelWindow};
pub use repository::TravelRepository;
