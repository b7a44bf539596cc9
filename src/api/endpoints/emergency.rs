//! Emergency simulation endpoints.
//!
//! Four operations over one piece of state: create, inspect, resolve,
//! reset. The simulator enforces the single-active-emergency rule and
//! drives responses in the background.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::emergency::{CreateEmergency, EmergencyEvent};

/// `POST /api/emergency` — activate a new emergency. A missing or
/// partial body falls back to the demo scenario defaults. 409 while
/// another emergency is active.
pub async fn create(
    State(ctx): State<ApiContext>,
    body: Option<Json<CreateEmergency>>,
) -> Result<(StatusCode, Json<EmergencyEvent>), ApiError> {
    let request = body.map(|Json(req)| req).unwrap_or_default();
    let event = ctx.core.emergency.create(&request)?;
    Ok((StatusCode::CREATED, Json(event)))
}

#[derive(Serialize)]
pub struct EmergencyStateResponse {
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EmergencyEvent>,
}

/// `GET /api/emergency` — current simulation state.
pub async fn current(
    State(ctx): State<ApiContext>,
) -> Result<Json<EmergencyStateResponse>, ApiError> {
    let event = ctx.core.emergency.current()?;
    let active = event
        .as_ref()
        .is_some_and(|e| e.status == crate::emergency::EmergencyStatus::Active);
    Ok(Json(EmergencyStateResponse { active, event }))
}

/// `POST /api/emergency/resolve` — mark the active emergency resolved.
pub async fn resolve(
    State(ctx): State<ApiContext>,
) -> Result<Json<EmergencyEvent>, ApiError> {
    Ok(Json(ctx.core.emergency.resolve()?))
}

#[derive(Serialize)]
pub struct ResetResponse {
    pub success: bool,
}

/// `POST /api/emergency/reset` — clear the simulation back to idle.
pub async fn reset(State(ctx): State<ApiContext>) -> Result<Json<ResetResponse>, ApiError> {
    ctx.core.emergency.reset()?;
    Ok(Json(ResetResponse { success: true }))
}
