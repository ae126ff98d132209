//! Page payloads
//!
//! Each page is `view` (the template that renders it) plus the portal
//! context plus the view's own content, flattened into one JSON object.

use serde::Serialize;
use utoipa::ToSchema;

use crate::application::catalog::{
    GalleryCard, Overview, TravelCard, TravelDetail, TravelGallery, YearListing,
};
use crate::interfaces::http::common::PortalContext;

/// Template names.
pub mod views {
    pub const OVERVIEW: &str = "travel/overview.html";
    pub const TRAVELS: &str = "travel/travels.html";
    pub const TRAVEL_DETAIL: &str = "travel/details.html";
    pub const GALLERY: &str = "travel/gallery.html";
    pub const TRAVEL_GALLERY: &str = "travel/travel_galery.html";
    pub const CONTACT: &str = "contact.html";
    pub const UNAVAILABLE: &str = "travel/detail_not_found.html";
}

pub const REASON_TRAVEL_UNAVAILABLE: &str = "Viaje no disponible";
pub const REASON_GALLERY_NOT_READY: &str = "Oops! Imagenes no se han cargado";
pub const REASON_NO_RESULTS: &str = "No se encontraron resultados";

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Page<T> {
    pub view: String,
    #[serde(flatten)]
    pub context: PortalContext,
    #[serde(flatten)]
    pub content: T,
}

impl<T> Page<T> {
    pub fn new(view: &str, context: PortalContext, content: T) -> Self {
        Self {
            view: view.to_string(),
            context,
            content,
        }
    }
}

/// Single-travel content, nested under `travel`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TravelContent<T> {
    pub travel: T,
}

/// Fallback content explaining why nothing is shown.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Unavailable {
    pub reason: String,
}

pub type OverviewPage = Page<Overview>;
pub type TravelsPage = Page<YearListing<TravelCard>>;
pub type GalleryPage = Page<YearListing<GalleryCard>>;
pub type TravelDetailPage = Page<TravelContent<TravelDetail>>;
pub type TravelGalleryPage = Page<TravelContent<TravelGallery>>;
pub type UnavailablePage = Page<Unavailable>;
