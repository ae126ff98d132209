//! Public page handlers

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::dto::{
    views, GalleryPage, OverviewPage, Page, TravelContent, TravelDetailPage, TravelGalleryPage,
    TravelsPage, Unavailable, UnavailablePage, REASON_GALLERY_NOT_READY, REASON_NO_RESULTS,
    REASON_TRAVEL_UNAVAILABLE,
};
use crate::domain::DomainError;
use crate::interfaces::http::common::{ApiError, ApiResponse, PortalContext};
use crate::interfaces::http::router::AppState;

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Canonical (lowercase, hyphenated) form of a path uuid.
fn parse_travel_uuid(raw: &str) -> Option<String> {
    Uuid::parse_str(raw).ok().map(|u| u.hyphenated().to_string())
}

fn unavailable(context: PortalContext, reason: &str) -> UnavailablePage {
    Page::new(
        views::UNAVAILABLE,
        context,
        Unavailable {
            reason: reason.to_string(),
        },
    )
}

/// Fallback page answered with 404.
pub(crate) fn no_results(context: PortalContext) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(unavailable(context, REASON_NO_RESULTS)),
    )
        .into_response()
}

fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Pages",
    responses(
        (status = 200, description = "Landing page", body = OverviewPage),
        (status = 503, description = "No active portal", body = ApiResponse<String>)
    )
)]
pub async fn overview(
    State(state): State<AppState>,
    context: PortalContext,
) -> Result<Json<OverviewPage>, ApiError> {
    let content = state.catalog.overview(today()).await?;
    Ok(Json(Page::new(views::OVERVIEW, context, content)))
}

#[utoipa::path(
    get,
    path = "/travels/",
    tag = "Pages",
    responses(
        (status = 200, description = "Upcoming travels grouped by year", body = TravelsPage)
    )
)]
pub async fn travels(
    State(state): State<AppState>,
    context: PortalContext,
) -> Result<Json<TravelsPage>, ApiError> {
    let content = state.catalog.upcoming_by_year(today()).await?;
    Ok(Json(Page::new(views::TRAVELS, context, content)))
}

#[utoipa::path(
    get,
    path = "/travel-details/{travel_uuid}/",
    tag = "Pages",
    params(("travel_uuid" = String, Path, description = "Travel UUID")),
    responses(
        (status = 200, description = "Travel detail, or the fallback page when unavailable", body = TravelDetailPage),
        (status = 404, description = "Malformed UUID", body = UnavailablePage)
    )
)]
pub async fn travel_detail(
    State(state): State<AppState>,
    context: PortalContext,
    Path(travel_uuid): Path<String>,
) -> Result<Response, ApiError> {
    let Some(uuid) = parse_travel_uuid(&travel_uuid) else {
        return Ok(no_results(context));
    };

    match state.catalog.travel_detail(&uuid, today()).await {
        Ok(travel) => {
            let page = Page::new(views::TRAVEL_DETAIL, context, TravelContent { travel });
            Ok(Json(page).into_response())
        }
        Err(e) if e.is_unavailable() => {
            Ok(Json(unavailable(context, REASON_TRAVEL_UNAVAILABLE)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    get,
    path = "/gallery/",
    tag = "Pages",
    responses(
        (status = 200, description = "Finished travels grouped by year", body = GalleryPage)
    )
)]
pub async fn gallery(
    State(state): State<AppState>,
    context: PortalContext,
) -> Result<Json<GalleryPage>, ApiError> {
    let content = state.catalog.past_by_year(today()).await?;
    Ok(Json(Page::new(views::GALLERY, context, content)))
}

#[utoipa::path(
    get,
    path = "/travel-gallery/{travel_uuid}/",
    tag = "Pages",
    params(("travel_uuid" = String, Path, description = "Travel UUID")),
    responses(
        (status = 200, description = "Photo gallery, or the fallback page when unavailable", body = TravelGalleryPage),
        (status = 404, description = "Malformed UUID", body = UnavailablePage)
    )
)]
pub async fn travel_gallery(
    State(state): State<AppState>,
    context: PortalContext,
    Path(travel_uuid): Path<String>,
) -> Result<Response, ApiError> {
    let Some(uuid) = parse_travel_uuid(&travel_uuid) else {
        return Ok(no_results(context));
    };

    match state.catalog.travel_gallery(&uuid, today()).await {
        Ok(travel) => {
            let page = Page::new(views::TRAVEL_GALLERY, context, TravelContent { travel });
            Ok(Json(page).into_response())
        }
        Err(e) if e.is_unavailable() => {
            Ok(Json(unavailable(context, REASON_GALLERY_NOT_READY)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    get,
    path = "/whatsapp-travel/{travel_uuid}/",
    tag = "Inquiries",
    params(("travel_uuid" = String, Path, description = "Travel UUID")),
    responses(
        (status = 302, description = "Redirect to a WhatsApp chat about the travel"),
        (status = 404, description = "Unknown travel", body = UnavailablePage)
    )
)]
pub async fn whatsapp_travel(
    State(state): State<AppState>,
    context: PortalContext,
    headers: HeaderMap,
    Path(travel_uuid): Path<String>,
) -> Result<Response, ApiError> {
    let Some(uuid) = parse_travel_uuid(&travel_uuid) else {
        return Ok(no_results(context));
    };

    let travel = match state.catalog.find_travel(&uuid).await {
        Ok(travel) => travel,
        Err(DomainError::NotFound { .. }) => return Ok(no_results(context)),
        Err(e) => return Err(e.into()),
    };

    let referer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let link = state
        .whatsapp
        .travel_inquiry(context.mobile_phone(), &travel.name, referer);
    Ok(found(link))
}

#[utoipa::path(
    get,
    path = "/whatsapp-general/",
    tag = "Inquiries",
    responses(
        (status = 302, description = "Redirect to a WhatsApp chat about upcoming travels")
    )
)]
pub async fn whatsapp_general(State(state): State<AppState>) -> Response {
    found(state.whatsapp.general_inquiry())
}

/// Any route without a handler.
pub async fn not_found(context: PortalContext) -> Response {
    no_results(context)
}
