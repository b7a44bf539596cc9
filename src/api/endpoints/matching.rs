//! Donor matching endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::matching::{self, MatchRequest, Urgency};
use crate::models::{BloodType, MatchedDonor};

/// Body accepted as strings so an unknown blood type yields a clean
/// 400 instead of a deserialization rejection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub blood_type: Option<String>,
    pub urgency: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub blood_type: BloodType,
    pub urgency: Urgency,
    pub count: usize,
    pub donors: Vec<MatchedDonor>,
}

/// `POST /api/match` — search for compatible donors.
pub async fn search(
    State(_ctx): State<ApiContext>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let raw = req
        .blood_type
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Blood type is required".into()))?;
    let blood_type: BloodType = raw
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid blood type: {raw}")))?;

    let urgency = match req.urgency.as_deref() {
        None | Some("") => Urgency::Routine,
        Some(raw) => raw
            .parse()
            .map_err(|_| ApiError::BadRequest(format!("Invalid urgency: {raw}")))?,
    };

    let request = MatchRequest { blood_type, urgency };
    let donors = matching::find_donors(&request, &mut rand::thread_rng());
    tracing::debug!(%blood_type, %urgency, count = donors.len(), "matching search");

    Ok(Json(SearchResponse {
        blood_type,
        urgency,
        count: donors.len(),
        donors,
    }))
}
