//! Donor eligibility scoring.
//!
//! A weighted sum over three criteria — age, weight, recent illness —
//! mapped to a 0-100 score and a three-tier verdict. The registration
//! form posts age and weight as free-text fields, so the request schema
//! accepts numbers or strings; a field that does not parse as a whole
//! number contributes zero to its criterion instead of failing the
//! request.

use serde::{Deserialize, Serialize};

use crate::models::str_enum;

/// Score at or above which a donor is fully eligible.
pub const ELIGIBLE_MIN: u8 = 70;
/// Score at or above which a donor is conditionally eligible.
pub const CONDITIONAL_MIN: u8 = 50;

str_enum!(Verdict {
    Eligible => "Eligible",
    ConditionallyEligible => "Conditionally Eligible",
    NotEligible => "Not Eligible",
});

/// Points earned per criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub age: u8,
    pub weight: u8,
    pub health: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub score: u8,
    pub verdict: Verdict,
    pub breakdown: Breakdown,
}

/// Age criterion: 18-65 is the ideal donation window, 66-75 is
/// accepted with reduced points, anything else earns nothing.
pub fn age_points(age: Option<u32>) -> u8 {
    match age {
        Some(18..=65) => 40,
        Some(66..=75) => 20,
        _ => 0,
    }
}

/// Weight criterion: at least 50 kg is ideal, 45-49 kg earns half.
pub fn weight_points(weight: Option<u32>) -> u8 {
    match weight {
        Some(w) if w >= 50 => 30,
        Some(45..=49) => 15,
        _ => 0,
    }
}

/// Health criterion: full points unless the donor reports an illness
/// in the recent past.
pub fn health_points(recent_illness: bool) -> u8 {
    if recent_illness {
        0
    } else {
        30
    }
}

pub fn verdict_for(score: u8) -> Verdict {
    if score >= ELIGIBLE_MIN {
        Verdict::Eligible
    } else if score >= CONDITIONAL_MIN {
        Verdict::ConditionallyEligible
    } else {
        Verdict::NotEligible
    }
}

/// Score a donor. `None` for age or weight means the field was missing
/// or unparsable and scores zero.
pub fn assess(age: Option<u32>, weight: Option<u32>, recent_illness: bool) -> EligibilityResult {
    let breakdown = Breakdown {
        age: age_points(age),
        weight: weight_points(weight),
        health: health_points(recent_illness),
    };
    let score = breakdown.age + breakdown.weight + breakdown.health;
    EligibilityResult {
        score,
        verdict: verdict_for(score),
        breakdown,
    }
}

// ═══════════════════════════════════════════════════════════
// Lenient numeric form fields
// ═══════════════════════════════════════════════════════════

/// A numeric form field that tolerates string input.
///
/// Parses like the registration form does: leading digits of a string
/// count ("45kg" is 45), anything else becomes `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "LenientNumber")]
pub struct FormNumber(pub Option<u32>);

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl From<LenientNumber> for FormNumber {
    fn from(value: LenientNumber) -> Self {
        let parsed = match value {
            LenientNumber::Int(i) => u32::try_from(i).ok(),
            LenientNumber::Float(f) if f.is_finite() && f >= 0.0 => Some(f as u32),
            LenientNumber::Float(_) => None,
            LenientNumber::Text(s) => parse_leading_int(&s),
            LenientNumber::Other(_) => None,
        };
        FormNumber(parsed)
    }
}

fn parse_leading_int(s: &str) -> Option<u32> {
    let trimmed = s.trim();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideal_donor_scores_100() {
        for age in [18, 40, 65] {
            let result = assess(Some(age), Some(70), false);
            assert_eq!(result.score, 100);
            assert_eq!(result.verdict, Verdict::Eligible);
        }
    }

    #[test]
    fn older_light_ill_donor_is_not_eligible() {
        for age in [66, 70, 75] {
            for weight in [45, 47, 49] {
                let result = assess(Some(age), Some(weight), true);
                assert_eq!(result.score, 35);
                assert_eq!(result.verdict, Verdict::NotEligible);
            }
        }
    }

    #[test]
    fn age_boundaries() {
        assert_eq!(age_points(Some(17)), 0);
        assert_eq!(age_points(Some(18)), 40);
        assert_eq!(age_points(Some(65)), 40);
        assert_eq!(age_points(Some(66)), 20);
        assert_eq!(age_points(Some(75)), 20);
        assert_eq!(age_points(Some(76)), 0);
        assert_eq!(age_points(None), 0);
    }

    #[test]
    fn weight_boundaries() {
        assert_eq!(weight_points(Some(44)), 0);
        assert_eq!(weight_points(Some(45)), 15);
        assert_eq!(weight_points(Some(49)), 15);
        assert_eq!(weight_points(Some(50)), 30);
        assert_eq!(weight_points(None), 0);
    }

    #[test]
    fn score_monotone_in_weight() {
        // Holding age and illness fixed, moving weight up a band never
        // lowers the score.
        for (lighter, heavier) in [(40, 45), (45, 50), (44, 49), (49, 120)] {
            let low = assess(Some(30), Some(lighter), false).score;
            let high = assess(Some(30), Some(heavier), false).score;
            assert!(high >= low, "{heavier}kg scored below {lighter}kg");
        }
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(verdict_for(100), Verdict::Eligible);
        assert_eq!(verdict_for(70), Verdict::Eligible);
        assert_eq!(verdict_for(69), Verdict::ConditionallyEligible);
        assert_eq!(verdict_for(50), Verdict::ConditionallyEligible);
        assert_eq!(verdict_for(49), Verdict::NotEligible);
        assert_eq!(verdict_for(0), Verdict::NotEligible);
    }

    #[test]
    fn verdict_wire_form_has_spaces() {
        let json = serde_json::to_string(&Verdict::ConditionallyEligible).unwrap();
        assert_eq!(json, "\"Conditionally Eligible\"");
    }

    #[test]
    fn form_number_accepts_int_and_string() {
        let n: FormNumber = serde_json::from_str("45").unwrap();
        assert_eq!(n.0, Some(45));
        let n: FormNumber = serde_json::from_str("\"45\"").unwrap();
        assert_eq!(n.0, Some(45));
        let n: FormNumber = serde_json::from_str("\" 45kg \"").unwrap();
        assert_eq!(n.0, Some(45));
    }

    #[test]
    fn form_number_unparsable_is_none() {
        for raw in ["\"abc\"", "null", "true", "-3", "[1]"] {
            let n: FormNumber = serde_json::from_str(raw).unwrap();
            assert_eq!(n.0, None, "{raw} should not parse");
        }
    }

    #[test]
    fn unparsable_fields_score_zero_not_error() {
        // "abc" age + valid weight + healthy = 0 + 30 + 30
        let result = assess(None, Some(60), false);
        assert_eq!(result.score, 60);
        assert_eq!(result.verdict, Verdict::ConditionallyEligible);
    }
}
