//! Donor-facing records: the registration profile and the per-search
//! match result handed back by the matching simulator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::blood::BloodType;

/// A donor as captured by the registration form. Held only for the
/// duration of the request; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorProfile {
    pub name: String,
    pub age: u32,
    /// Kilograms.
    pub weight: u32,
    pub blood_type: BloodType,
    pub location: String,
    #[serde(default)]
    pub recent_illness: bool,
}

/// One candidate in a matching-search result. Distance, response time
/// and score are fabricated per search and discarded afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedDonor {
    pub id: Uuid,
    pub name: String,
    pub blood_type: BloodType,
    /// Miles.
    pub distance: f32,
    /// Minutes until the donor could plausibly arrive.
    pub response_time: u32,
    /// Percent, 0-100.
    pub match_score: u8,
}
