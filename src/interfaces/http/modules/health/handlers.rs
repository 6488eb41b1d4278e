//! Health check handler

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::HistoryRepository;

/// Health check state
#[derive(Clone)]
pub struct HealthState {
    pub repo: Arc<dyn HistoryRepository>,
    pub started_at: Arc<Instant>,
}

/// Service health response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `ok` or `degraded`
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// Records available for listing, `null` when the store is unreachable
    pub records: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is degraded", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, records) = match state.repo.count().await {
        Ok(count) => (StatusCode::OK, Some(count)),
        Err(e) => {
            error!("Health check: history store unavailable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, None)
        }
    };

    (
        status,
        Json(HealthResponse {
            status: if status.is_success() { "ok" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.started_at.elapsed().as_secs(),
            records,
        }),
    )
}
