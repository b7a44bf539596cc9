//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub emergency_active: bool,
}

/// `GET /api/health` — liveness check.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    let emergency_active = ctx.core.emergency.current()?.is_some();

    Ok(Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
        emergency_active,
    }))
}
