//! Portal aggregate

pub mod model;
pub mod repository;

pub use model::{Portal, PortalContact, SocialMediaAccount};
pub use repository::PortalRepository;
