//! Demand and supply forecasting.
//!
//! Synthetic series only: a sine swing plus uniform noise around a
//! base level, with a drifting "prediction" overlaid on the trailing
//! window. No fitting, no history — each request fabricates a fresh
//! series.

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

use crate::models::str_enum;
use crate::models::BloodType;

str_enum!(ForecastRange {
    Week => "week",
    Month => "month",
    Quarter => "quarter",
});

str_enum!(SeriesKind {
    Demand => "demand",
    Supply => "supply",
});

impl ForecastRange {
    pub fn points(self) -> usize {
        match self {
            ForecastRange::Week => 7,
            ForecastRange::Month => 30,
            ForecastRange::Quarter => 90,
        }
    }
}

impl SeriesKind {
    fn base(self) -> f64 {
        match self {
            SeriesKind::Demand => 100.0,
            SeriesKind::Supply => 80.0,
        }
    }
}

/// Trailing points that carry a predicted value.
pub const PREDICTION_WINDOW: usize = 7;

#[derive(Debug, Clone, Serialize)]
pub struct ForecastPoint {
    pub date: String,
    pub actual: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted: Option<u32>,
}

/// Fabricate a time series ending the day before `today`.
pub fn time_series<R: Rng>(
    kind: SeriesKind,
    range: ForecastRange,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<ForecastPoint> {
    let n = range.points();
    (0..n)
        .map(|i| {
            let date = today - chrono::Duration::days((n - i) as i64);
            let variance = (i as f64 / 5.0).sin() * 15.0;
            let noise = rng.gen_range(-5.0..5.0);
            let actual = (kind.base() + variance + noise).round().max(0.0) as u32;

            let predicted = if i + PREDICTION_WINDOW >= n {
                let trend = i as f64 * (0.5 + rng.gen_range(0.0..0.2));
                let drift = rng.gen_range(-5.0..10.0);
                Some((actual as f64 + trend / 3.0 + drift).round().max(0.0) as u32)
            } else {
                None
            };

            ForecastPoint {
                date: date.format("%b %-d").to_string(),
                actual,
                predicted,
            }
        })
        .collect()
}

/// Current vs projected units by blood type — the demo's static table.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeProjection {
    pub blood_type: BloodType,
    pub current_units: u32,
    pub predicted_units: u32,
}

pub fn type_projections() -> Vec<TypeProjection> {
    use BloodType::*;
    [
        (APositive, 120, 145),
        (ANegative, 40, 35),
        (BPositive, 80, 95),
        (BNegative, 25, 30),
        (AbPositive, 30, 25),
        (AbNegative, 10, 15),
        (OPositive, 150, 180),
        (ONegative, 45, 60),
    ]
    .into_iter()
    .map(|(blood_type, current_units, predicted_units)| TypeProjection {
        blood_type,
        current_units,
        predicted_units,
    })
    .collect()
}
