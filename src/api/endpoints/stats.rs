//! Network insight endpoints: counters, shortage report, donor map.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::insights::{self, NetworkStats, RegionDensity, ShortageEntry, TrendPoint};

/// `GET /api/stats` — landing-page counters.
pub async fn network(State(_ctx): State<ApiContext>) -> Result<Json<NetworkStats>, ApiError> {
    Ok(Json(insights::network_stats()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortageResponse {
    pub blood_types: Vec<ShortageEntry>,
    pub monthly_trend: Vec<TrendPoint>,
}

/// `GET /api/shortage` — shortage pressure by type plus trend.
pub async fn shortage(State(_ctx): State<ApiContext>) -> Result<Json<ShortageResponse>, ApiError> {
    Ok(Json(ShortageResponse {
        blood_types: insights::shortage_by_type(),
        monthly_trend: insights::monthly_trend(),
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapResponse {
    pub regions: Vec<RegionDensity>,
    pub total_donors: u32,
}

/// `GET /api/heatmap` — regional donor density.
pub async fn heatmap(State(_ctx): State<ApiContext>) -> Result<Json<HeatmapResponse>, ApiError> {
    Ok(Json(HeatmapResponse {
        regions: insights::region_density(),
        total_donors: insights::total_mapped_donors(),
    }))
}
