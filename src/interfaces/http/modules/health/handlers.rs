//! Health check handler

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::RepositoryProvider;
use crate::infrastructure::database::ping;

#[derive(Clone)]
pub struct HealthState {
    pub db: DatabaseConnection,
    pub repos: Arc<dyn RepositoryProvider>,
    pub started_at: Instant,
}

impl HealthState {
    pub fn new(db: DatabaseConnection, repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            db,
            repos,
            started_at: Instant::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    /// Serving, but pages answer 503 until a portal is activated
    Degraded,
    Unavailable,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    /// Round-trip of `SELECT 1`; absent when the database is unreachable
    pub database_latency_ms: Option<u64>,
    pub portal_configured: bool,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Operations",
    responses(
        (status = 200, description = "Serving (status `ok` or `degraded`)", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let db_start = Instant::now();
    let database_latency_ms = match ping(&state.db).await {
        Ok(()) => Some(db_start.elapsed().as_millis() as u64),
        Err(e) => {
            tracing::warn!("Health check database ping failed: {}", e);
            None
        }
    };

    let portal_configured = database_latency_ms.is_some()
        && matches!(state.repos.portals().find_active().await, Ok(Some(_)));

    let status = match (database_latency_ms, portal_configured) {
        (None, _) => HealthStatus::Unavailable,
        (Some(_), false) => HealthStatus::Degraded,
        (Some(_), true) => HealthStatus::Ok,
    };
    let http_status = if status == HealthStatus::Unavailable {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (
        http_status,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.started_at.elapsed().as_secs(),
            database_latency_ms,
            portal_configured,
        }),
    )
}
