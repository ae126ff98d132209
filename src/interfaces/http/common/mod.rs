//! Shared HTTP building blocks: response envelope, error mapping and
//! request extractors.

pub mod error;
pub mod portal_context;
pub mod validated_form;

pub use error::ApiError;
pub use portal_context::{PortalContext, PortalDto, SocialMediaAccountDto};
pub use validated_form::ValidatedForm;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope of every error response:
/// `{"success": false, "data": null, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Payload; `null` on failure
    pub data: Option<T>,
    /// Error description; omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
