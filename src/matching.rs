//! Donor matching simulation.
//!
//! Given a requested blood type and an urgency level, produce an
//! ordered list of candidate donors. Candidates come from a fixed
//! demo pool filtered by transfusion compatibility; distance, response
//! time and score are fabricated per search. The only contract is the
//! output shape and its descending match-score order.

use rand::Rng;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::str_enum;
use crate::models::{BloodType, MatchedDonor};

str_enum!(Urgency {
    Routine => "routine",
    Urgent => "urgent",
    Critical => "critical",
});

impl Default for Urgency {
    fn default() -> Self {
        Urgency::Routine
    }
}

impl Urgency {
    /// Scale applied to fabricated response times — urgent searches
    /// surface donors who can arrive sooner.
    pub fn response_factor(self) -> f32 {
        match self {
            Urgency::Routine => 1.0,
            Urgency::Urgent => 0.8,
            Urgency::Critical => 0.6,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub blood_type: BloodType,
    #[serde(default)]
    pub urgency: Urgency,
}

/// At most this many candidates per search.
pub const MAX_RESULTS: usize = 4;

/// Demo donor pool. Every blood type is represented so a compatible
/// donor always exists.
const CANDIDATES: &[(&str, BloodType)] = &[
    ("John D.", BloodType::ONegative),
    ("Sarah M.", BloodType::OPositive),
    ("Robert K.", BloodType::APositive),
    ("Emily L.", BloodType::ANegative),
    ("Miguel S.", BloodType::BPositive),
    ("Priya N.", BloodType::BNegative),
    ("Hannah T.", BloodType::AbPositive),
    ("Omar R.", BloodType::AbNegative),
    ("Grace W.", BloodType::ONegative),
    ("Daniel F.", BloodType::APositive),
    ("Chloe B.", BloodType::OPositive),
    ("Victor H.", BloodType::BNegative),
];

/// Run a matching search. Results are sorted descending by match
/// score; closer candidates rank higher.
pub fn find_donors<R: Rng>(request: &MatchRequest, rng: &mut R) -> Vec<MatchedDonor> {
    let mut donors: Vec<MatchedDonor> = CANDIDATES
        .iter()
        .filter(|(_, bt)| bt.compatible_with(request.blood_type))
        .take(MAX_RESULTS)
        .enumerate()
        .map(|(rank, (name, bt))| {
            let distance = 2.4 + rank as f32 * 1.3 + rng.gen_range(0.0..0.6);
            let base_response = 15 + rank as u32 * 5;
            let response_time =
                (base_response as f32 * request.urgency.response_factor()).round() as u32;
            let match_score = 98u8
                .saturating_sub(rank as u8 * 5)
                .saturating_sub(rng.gen_range(0..3));
            MatchedDonor {
                id: Uuid::new_v4(),
                name: (*name).to_string(),
                blood_type: *bt,
                distance: (distance * 10.0).round() / 10.0,
                response_time,
                match_score,
            }
        })
        .collect();

    donors.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    donors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn request(blood_type: BloodType, urgency: Urgency) -> MatchRequest {
        MatchRequest { blood_type, urgency }
    }

    #[test]
    fn results_sorted_descending_by_score() {
        let mut rng = StdRng::seed_from_u64(7);
        for bt in BloodType::ALL {
            let donors = find_donors(&request(bt, Urgency::Routine), &mut rng);
            assert!(!donors.is_empty(), "no donors for {bt}");
            for pair in donors.windows(2) {
                assert!(pair[0].match_score >= pair[1].match_score);
            }
        }
    }

    #[test]
    fn every_candidate_is_compatible() {
        let mut rng = StdRng::seed_from_u64(11);
        for bt in BloodType::ALL {
            for donor in find_donors(&request(bt, Urgency::Routine), &mut rng) {
                assert!(
                    donor.blood_type.compatible_with(bt),
                    "{} ({}) cannot give to {bt}",
                    donor.name,
                    donor.blood_type
                );
            }
        }
    }

    #[test]
    fn o_negative_request_gets_only_o_negative() {
        let mut rng = StdRng::seed_from_u64(3);
        let donors = find_donors(&request(BloodType::ONegative, Urgency::Routine), &mut rng);
        assert_eq!(donors.len(), 2); // two O- donors in the pool
        assert!(donors.iter().all(|d| d.blood_type == BloodType::ONegative));
    }

    #[test]
    fn at_most_four_results() {
        let mut rng = StdRng::seed_from_u64(5);
        // AB+ accepts everything, so the pool is largest here.
        let donors = find_donors(&request(BloodType::AbPositive, Urgency::Routine), &mut rng);
        assert_eq!(donors.len(), MAX_RESULTS);
    }

    #[test]
    fn critical_urgency_shortens_response_times() {
        let mut rng_a = StdRng::seed_from_u64(9);
        let mut rng_b = StdRng::seed_from_u64(9);
        let routine = find_donors(&request(BloodType::APositive, Urgency::Routine), &mut rng_a);
        let critical = find_donors(&request(BloodType::APositive, Urgency::Critical), &mut rng_b);
        let routine_total: u32 = routine.iter().map(|d| d.response_time).sum();
        let critical_total: u32 = critical.iter().map(|d| d.response_time).sum();
        assert!(critical_total < routine_total);
    }

    #[test]
    fn scores_stay_in_percent_range() {
        let mut rng = StdRng::seed_from_u64(13);
        for bt in BloodType::ALL {
            for donor in find_donors(&request(bt, Urgency::Urgent), &mut rng) {
                assert!(donor.match_score <= 100);
                assert!(donor.distance > 0.0);
            }
        }
    }
}
