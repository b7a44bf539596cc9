//! Donor dashboard endpoint.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::dashboard::{self, DonorDashboard};

/// `GET /api/donors/:id` — the donor dashboard payload.
pub async fn detail(
    State(_ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<DonorDashboard>, ApiError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::BadRequest("Donor ID is required".into()));
    }

    let today = chrono::Utc::now().date_naive();
    Ok(Json(dashboard::donor_dashboard(id, today)))
}
