use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// The travel exists but has neither gallery images nor an external gallery url.
    #[error("Gallery for travel {0} is not ready")]
    GalleryNotReady(String),

    #[error("No active portal is configured")]
    PortalNotConfigured,

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    /// Outbound mail transport failed.
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }

    /// Conditions the pages render as the "unavailable" fallback view
    /// instead of an error status.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::GalleryNotReady(_))
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Storage(format!("Database error: {}", e))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_key() {
        let err = DomainError::not_found("Travel", "uuid", "abc");
        assert_eq!(err.to_string(), "Not found: Travel with uuid=abc");
        assert!(err.is_unavailable());
    }

    #[test]
    fn gallery_not_ready_is_unavailable_but_delivery_is_not() {
        assert!(DomainError::GalleryNotReady("x".into()).is_unavailable());
        assert!(!DomainError::Delivery("smtp down".into()).is_unavailable());
        assert!(!DomainError::PortalNotConfigured.is_unavailable());
    }

    #[test]
    fn db_errors_map_to_storage_errors() {
        let err: DomainError = sea_orm::DbErr::Custom("boom".into()).into();
        assert!(matches!(err, DomainError::Storage(ref m) if m.starts_with("Database error:")));
    }
}
