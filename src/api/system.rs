//! System status endpoints and the health check.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;
use tracing::info;

use super::validation::json_body;
use super::{ApiError, AppState, HealthResponse};
use crate::models::{SystemStatus, SystemStatusPatch};

/// `GET /api/system-status`
pub async fn get_system_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SystemStatus>, ApiError> {
    state
        .store()
        .get_system_status()
        .await
        .map(Json)
        .ok_or_else(|| ApiError::internal("System status record is missing"))
}

/// `PATCH /api/system-status`
///
/// Only the fields present in the body change. `null` values, unknown keys
/// and wrong types are rejected with 400.
pub async fn update_system_status(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SystemStatusPatch>, JsonRejection>,
) -> Result<Json<SystemStatus>, ApiError> {
    let patch = json_body(payload, "Invalid system status data")?;

    let status = state.store().update_system_status(patch).await;
    info!(
        protection = status.protection,
        vpn = status.vpn,
        max_mode = status.max_mode,
        autopilot = status.autopilot,
        "System status updated"
    );

    Ok(Json(status))
}

/// `GET /api/health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
