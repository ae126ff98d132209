//! Travel catalog: availability-aware listings, year grouping and the
//! per-view projections.

pub mod dates;
pub mod gallery_columns;
pub mod projections;
pub mod service;
pub mod year_groups;

pub use gallery_columns::{round_robin_columns, GALLERY_COLUMNS};
pub use projections::*;
pub use service::{MediaUrls, TravelCatalogService};
pub use year_groups::{Dated, YearGroup, YearGroups};
