//! Forecast endpoint.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::forecast::{self, ForecastPoint, ForecastRange, SeriesKind, TypeProjection};

#[derive(Deserialize)]
pub struct ForecastQuery {
    pub series: Option<String>,
    pub range: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub series: SeriesKind,
    pub range: ForecastRange,
    pub points: Vec<ForecastPoint>,
    pub blood_types: Vec<TypeProjection>,
}

/// `GET /api/forecast?series=demand&range=week` — fabricate a series
/// plus the per-type projection table.
pub async fn get(
    State(_ctx): State<ApiContext>,
    Query(query): Query<ForecastQuery>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let series = match query.series.as_deref() {
        None | Some("") => SeriesKind::Demand,
        Some(raw) => raw
            .parse()
            .map_err(|_| ApiError::BadRequest(format!("Invalid series: {raw}")))?,
    };
    let range = match query.range.as_deref() {
        None | Some("") => ForecastRange::Week,
        Some(raw) => raw
            .parse()
            .map_err(|_| ApiError::BadRequest(format!("Invalid range: {raw}")))?,
    };

    let today = chrono::Utc::now().date_naive();
    let points = forecast::time_series(series, range, today, &mut rand::thread_rng());

    Ok(Json(ForecastResponse {
        series,
        range,
        points,
        blood_types: forecast::type_projections(),
    }))
}
