//! Hospital dashboard endpoint.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::dashboard::{self, HospitalDashboard};

/// `GET /api/hospitals/:id` — the hospital dashboard payload.
pub async fn detail(
    State(_ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<HospitalDashboard>, ApiError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::BadRequest("Hospital ID is required".into()));
    }

    Ok(Json(dashboard::hospital_dashboard(id)))
}
