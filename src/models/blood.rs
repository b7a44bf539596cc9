//! Blood type taxonomy: the eight ABO/Rh combinations, their
//! compatibility table, population share, and baseline demand.

use crate::models::str_enum;

str_enum!(BloodType {
    APositive => "A+",
    ANegative => "A-",
    BPositive => "B+",
    BNegative => "B-",
    AbPositive => "AB+",
    AbNegative => "AB-",
    OPositive => "O+",
    ONegative => "O-",
});

str_enum!(Demand {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

impl BloodType {
    pub const ALL: [BloodType; 8] = [
        BloodType::APositive,
        BloodType::ANegative,
        BloodType::BPositive,
        BloodType::BNegative,
        BloodType::AbPositive,
        BloodType::AbNegative,
        BloodType::OPositive,
        BloodType::ONegative,
    ];

    /// Recipient types this type may donate to.
    pub fn can_give_to(self) -> &'static [BloodType] {
        use BloodType::*;
        match self {
            APositive => &[APositive, AbPositive],
            ANegative => &[APositive, ANegative, AbPositive, AbNegative],
            BPositive => &[BPositive, AbPositive],
            BNegative => &[BPositive, BNegative, AbPositive, AbNegative],
            AbPositive => &[AbPositive],
            AbNegative => &[AbPositive, AbNegative],
            OPositive => &[OPositive, APositive, BPositive, AbPositive],
            // Universal donor
            ONegative => &BloodType::ALL,
        }
    }

    /// Donor types this type may receive from.
    pub fn can_receive_from(self) -> &'static [BloodType] {
        use BloodType::*;
        match self {
            APositive => &[APositive, ANegative, OPositive, ONegative],
            ANegative => &[ANegative, ONegative],
            BPositive => &[BPositive, BNegative, OPositive, ONegative],
            BNegative => &[BNegative, ONegative],
            // Universal recipient
            AbPositive => &BloodType::ALL,
            AbNegative => &[ANegative, BNegative, AbNegative, ONegative],
            OPositive => &[OPositive, ONegative],
            ONegative => &[ONegative],
        }
    }

    /// Whether a donor of this type is transfusion-compatible with
    /// a recipient of `recipient` type.
    pub fn compatible_with(self, recipient: BloodType) -> bool {
        self.can_give_to().contains(&recipient)
    }

    /// Approximate share of the population, percent.
    pub fn population_share(self) -> f32 {
        use BloodType::*;
        match self {
            APositive => 35.7,
            ANegative => 6.3,
            BPositive => 8.5,
            BNegative => 1.5,
            AbPositive => 3.4,
            AbNegative => 0.6,
            OPositive => 37.4,
            ONegative => 6.6,
        }
    }

    /// Network-wide baseline demand outlook for this type.
    pub fn baseline_demand(self) -> Demand {
        use BloodType::*;
        match self {
            APositive | BPositive => Demand::Medium,
            AbPositive => Demand::Low,
            ANegative | BNegative | OPositive | ONegative => Demand::High,
            AbNegative => Demand::Medium,
        }
    }
}

impl Demand {
    /// Numeric rank for ordering comparisons (Low < Critical).
    pub fn severity(self) -> u8 {
        match self {
            Demand::Low => 0,
            Demand::Medium => 1,
            Demand::High => 2,
            Demand::Critical => 3,
        }
    }

    pub fn at_least(self, floor: Demand) -> bool {
        self.severity() >= floor.severity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_round_trips() {
        for bt in BloodType::ALL {
            let json = serde_json::to_string(&bt).unwrap();
            let back: BloodType = serde_json::from_str(&json).unwrap();
            assert_eq!(bt, back);
        }
        assert_eq!(serde_json::to_string(&BloodType::AbNegative).unwrap(), "\"AB-\"");
    }

    #[test]
    fn from_str_accepts_wire_form() {
        assert_eq!("O+".parse::<BloodType>().unwrap(), BloodType::OPositive);
        assert_eq!("AB-".parse::<BloodType>().unwrap(), BloodType::AbNegative);
        assert!("X+".parse::<BloodType>().is_err());
    }

    #[test]
    fn o_negative_is_universal_donor() {
        for recipient in BloodType::ALL {
            assert!(BloodType::ONegative.compatible_with(recipient));
        }
    }

    #[test]
    fn ab_positive_is_universal_recipient() {
        for donor in BloodType::ALL {
            assert!(donor.compatible_with(BloodType::AbPositive));
        }
    }

    #[test]
    fn give_and_receive_tables_agree() {
        for donor in BloodType::ALL {
            for recipient in BloodType::ALL {
                assert_eq!(
                    donor.can_give_to().contains(&recipient),
                    recipient.can_receive_from().contains(&donor),
                    "{donor} -> {recipient} tables disagree"
                );
            }
        }
    }

    #[test]
    fn population_shares_sum_to_whole() {
        let total: f32 = BloodType::ALL.iter().map(|bt| bt.population_share()).sum();
        assert!((total - 100.0).abs() < 0.5, "shares sum to {total}");
    }

    #[test]
    fn demand_ordering() {
        assert!(Demand::Critical.at_least(Demand::High));
        assert!(Demand::High.at_least(Demand::High));
        assert!(!Demand::Medium.at_least(Demand::High));
    }
}
