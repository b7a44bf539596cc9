//! Network-level figures: landing-page counters, shortage pressure by
//! blood type, monthly trend, and regional donor density. All demo
//! fixtures served as-is.

use serde::Serialize;

use crate::models::str_enum;
use crate::models::BloodType;

// ═══════════════════════════════════════════════════════════
// Network statistics
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStats {
    pub lives_saved: u32,
    pub partner_hospitals: u32,
    pub active_donors: u32,
    pub blood_units_collected: u32,
    pub collection_centers: u32,
    pub annual_drives: u32,
    pub years_of_service: u32,
}

pub fn network_stats() -> NetworkStats {
    NetworkStats {
        lives_saved: 150_000,
        partner_hospitals: 500,
        active_donors: 75_000,
        blood_units_collected: 250_000,
        collection_centers: 1_200,
        annual_drives: 365,
        years_of_service: 15,
    }
}

// ═══════════════════════════════════════════════════════════
// Shortage pressure
// ═══════════════════════════════════════════════════════════

str_enum!(ShortageLevel {
    Low => "Low",
    Medium => "Medium",
    High => "High",
    Critical => "Critical",
});

/// Tier the shortage-to-demand ratio the way the supply dashboard
/// colors it.
pub fn shortage_level(shortage: u32, demand: u32) -> ShortageLevel {
    if demand == 0 {
        return ShortageLevel::Low;
    }
    let ratio = shortage as f64 / demand as f64;
    if ratio > 0.8 {
        ShortageLevel::Critical
    } else if ratio > 0.6 {
        ShortageLevel::High
    } else if ratio > 0.4 {
        ShortageLevel::Medium
    } else {
        ShortageLevel::Low
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortageEntry {
    pub blood_type: BloodType,
    pub shortage: u32,
    pub demand: u32,
    pub urgency: ShortageLevel,
}

pub fn shortage_by_type() -> Vec<ShortageEntry> {
    use BloodType::*;
    [
        (OPositive, 85, 120),
        (APositive, 65, 95),
        (BPositive, 45, 70),
        (AbPositive, 25, 40),
        (ONegative, 95, 110),
        (ANegative, 55, 80),
        (BNegative, 35, 55),
        (AbNegative, 15, 25),
    ]
    .into_iter()
    .map(|(blood_type, shortage, demand)| ShortageEntry {
        blood_type,
        shortage,
        demand,
        urgency: shortage_level(shortage, demand),
    })
    .collect()
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrendPoint {
    pub month: &'static str,
    pub shortage: u32,
    pub demand: u32,
}

pub fn monthly_trend() -> Vec<TrendPoint> {
    [
        ("Jan", 320, 450),
        ("Feb", 280, 420),
        ("Mar", 350, 480),
        ("Apr", 290, 440),
        ("May", 310, 460),
        ("Jun", 340, 490),
    ]
    .into_iter()
    .map(|(month, shortage, demand)| TrendPoint { month, shortage, demand })
    .collect()
}

// ═══════════════════════════════════════════════════════════
// Regional donor density
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDensity {
    pub id: u32,
    pub area: &'static str,
    pub lat: f64,
    pub lng: f64,
    /// 0-100 relative density index.
    pub density: u32,
    pub donors: u32,
}

pub fn region_density() -> Vec<RegionDensity> {
    [
        (1, "Downtown", 40.7589, -73.9851, 85, 342),
        (2, "Midtown", 40.7505, -73.9934, 92, 428),
        (3, "Upper East Side", 40.7736, -73.9566, 78, 298),
        (4, "Brooklyn Heights", 40.6962, -73.9969, 65, 234),
        (5, "Queens", 40.7282, -73.7949, 58, 189),
        (6, "Bronx", 40.8448, -73.8648, 45, 156),
        (7, "Staten Island", 40.5795, -74.1502, 38, 98),
        (8, "Financial District", 40.7074, -74.0113, 72, 267),
    ]
    .into_iter()
    .map(|(id, area, lat, lng, density, donors)| RegionDensity {
        id,
        area,
        lat,
        lng,
        density,
        donors,
    })
    .collect()
}

/// Total donors across all mapped regions.
pub fn total_mapped_donors() -> u32 {
    region_density().iter().map(|r| r.donors).sum()
}
