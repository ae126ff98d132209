//! Contact page handlers

use axum::{extract::State, Json};

use super::dto::{ContactContent, ContactForm};
use crate::interfaces::http::common::{ApiError, ApiResponse, PortalContext, ValidatedForm};
use crate::interfaces::http::modules::pages::{views, Page};
use crate::interfaces::http::router::AppState;

pub type ContactPage = Page<ContactContent>;

#[utoipa::path(
    get,
    path = "/contact/",
    tag = "Contact",
    responses((status = 200, description = "Contact page", body = ContactPage))
)]
pub async fn contact_page(context: PortalContext) -> Json<ContactPage> {
    Json(Page::new(views::CONTACT, context, ContactContent { sent: false }))
}

#[utoipa::path(
    post,
    path = "/contact/",
    tag = "Contact",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Message forwarded to staff", body = ContactPage),
        (status = 422, description = "Invalid form", body = ApiResponse<String>),
        (status = 502, description = "Mail transport failed", body = ApiResponse<String>)
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    context: PortalContext,
    ValidatedForm(form): ValidatedForm<ContactForm>,
) -> Result<Json<ContactPage>, ApiError> {
    state.contact.submit(form.into()).await?;
    Ok(Json(Page::new(views::CONTACT, context, ContactContent { sent: true })))
}
