//! Eligibility scoring endpoint.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::eligibility::{self, EligibilityResult, FormNumber};

/// The registration form body. Age and weight arrive as text fields;
/// unparsable values score zero rather than failing the request.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRequest {
    #[allow(dead_code)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: FormNumber,
    #[serde(default)]
    pub weight: FormNumber,
    #[serde(default)]
    pub recent_illness: bool,
    #[allow(dead_code)]
    pub blood_type: Option<String>,
    #[allow(dead_code)]
    pub location: Option<String>,
}

/// `POST /api/eligibility` — score a donor registration.
pub async fn assess(
    State(_ctx): State<ApiContext>,
    Json(req): Json<EligibilityRequest>,
) -> Result<Json<EligibilityResult>, ApiError> {
    let result = eligibility::assess(req.age.0, req.weight.0, req.recent_illness);
    tracing::debug!(score = result.score, verdict = %result.verdict, "eligibility assessed");
    Ok(Json(result))
}
