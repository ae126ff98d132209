//! Portal context extractor
//!
//! Every page shows the active portal's contact data and social links.
//! Handlers ask for it explicitly with a `PortalContext` argument; when no
//! portal is active the request is answered with 503.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use serde::Serialize;
use utoipa::ToSchema;

use super::ApiError;
use crate::domain::{DomainError, PortalContact, RepositoryProvider};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PortalDto {
    pub name: String,
    pub address: String,
    pub email: String,
    pub mobile_phone: String,
    pub theme_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SocialMediaAccountDto {
    pub name: String,
    pub url: String,
}

/// Portal data attached to every page payload.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PortalContext {
    pub portal: PortalDto,
    pub social_media_accounts: Vec<SocialMediaAccountDto>,
}

impl PortalContext {
    /// Raw mobile phone of the portal, as stored.
    pub fn mobile_phone(&self) -> &str {
        &self.portal.mobile_phone
    }
}

impl From<PortalContact> for PortalContext {
    fn from(contact: PortalContact) -> Self {
        let portal = contact.portal;
        Self {
            portal: PortalDto {
                name: portal.name,
                address: portal.address,
                email: portal.email,
                mobile_phone: portal.mobile_phone,
                theme_color: portal.theme_color,
            },
            social_media_accounts: contact
                .social_media_accounts
                .into_iter()
                .map(|a| SocialMediaAccountDto {
                    name: a.name,
                    url: a.url,
                })
                .collect(),
        }
    }
}

impl<S> FromRequestParts<S> for PortalContext
where
    S: Send + Sync,
    Arc<dyn RepositoryProvider>: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let repos = <Arc<dyn RepositoryProvider> as FromRef<S>>::from_ref(state);
        let contact = repos
            .portals()
            .find_active()
            .await?
            .ok_or(DomainError::PortalNotConfigured)?;
        Ok(contact.into())
    }
}
