//! Partner-hospital blood stock snapshot.
//!
//! A fixed in-memory picture of three partner hospitals, shared by the
//! chat responder (demand lookups) and nothing else at runtime. Units
//! and demand levels are the demo fixture, not live inventory.

use std::sync::LazyLock;

use crate::models::{BloodType, Demand};

#[derive(Debug, Clone, Copy)]
pub struct StockLevel {
    pub units: u32,
    pub demand: Demand,
}

#[derive(Debug, Clone)]
pub struct HospitalStock {
    pub name: &'static str,
    levels: [(BloodType, StockLevel); 8],
}

impl HospitalStock {
    pub fn level(&self, blood_type: BloodType) -> StockLevel {
        self.levels
            .iter()
            .find(|(bt, _)| *bt == blood_type)
            .map(|(_, level)| *level)
            // All eight types are present in every snapshot row.
            .unwrap_or(StockLevel { units: 0, demand: Demand::Low })
    }

    /// Types this hospital lists at critical demand.
    pub fn critical_types(&self) -> Vec<BloodType> {
        self.levels
            .iter()
            .filter(|(_, level)| level.demand == Demand::Critical)
            .map(|(bt, _)| *bt)
            .collect()
    }

    /// Whether this hospital has elevated (high or critical) demand
    /// for the given type.
    pub fn needs(&self, blood_type: BloodType) -> bool {
        self.level(blood_type).demand.at_least(Demand::High)
    }
}

fn row(
    name: &'static str,
    levels: [(BloodType, u32, Demand); 8],
) -> HospitalStock {
    HospitalStock {
        name,
        levels: levels.map(|(bt, units, demand)| (bt, StockLevel { units, demand })),
    }
}

static PARTNERS: LazyLock<Vec<HospitalStock>> = LazyLock::new(|| {
    use crate::models::blood::BloodType::*;
    use Demand::*;
    vec![
        row(
            "Memorial Hospital",
            [
                (APositive, 45, High),
                (ANegative, 12, Medium),
                (BPositive, 23, Low),
                (BNegative, 8, High),
                (AbPositive, 5, Low),
                (AbNegative, 3, Critical),
                (OPositive, 67, Medium),
                (ONegative, 15, Critical),
            ],
        ),
        row(
            "City General Hospital",
            [
                (APositive, 32, Medium),
                (ANegative, 9, High),
                (BPositive, 18, Medium),
                (BNegative, 5, Critical),
                (AbPositive, 7, Low),
                (AbNegative, 2, Critical),
                (OPositive, 41, High),
                (ONegative, 11, Critical),
            ],
        ),
        row(
            "University Medical Center",
            [
                (APositive, 58, Low),
                (ANegative, 17, Medium),
                (BPositive, 29, Low),
                (BNegative, 10, High),
                (AbPositive, 12, Low),
                (AbNegative, 4, High),
                (OPositive, 73, Medium),
                (ONegative, 21, High),
            ],
        ),
    ]
});

pub fn partner_hospitals() -> &'static [HospitalStock] {
    &PARTNERS
}

/// Names of hospitals with elevated demand for the given type, in
/// snapshot order.
pub fn hospitals_needing(blood_type: BloodType) -> Vec<&'static str> {
    partner_hospitals()
        .iter()
        .filter(|h| h.needs(blood_type))
        .map(|h| h.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_partner_hospitals() {
        assert_eq!(partner_hospitals().len(), 3);
    }

    #[test]
    fn every_hospital_stocks_all_types() {
        for hospital in partner_hospitals() {
            for bt in BloodType::ALL {
                assert!(hospital.level(bt).units > 0, "{} missing {bt}", hospital.name);
            }
        }
    }

    #[test]
    fn o_negative_is_under_pressure_everywhere() {
        let names = hospitals_needing(BloodType::ONegative);
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn ab_positive_is_calm() {
        assert!(hospitals_needing(BloodType::AbPositive).is_empty());
    }

    #[test]
    fn memorial_critical_types() {
        let memorial = &partner_hospitals()[0];
        assert_eq!(memorial.name, "Memorial Hospital");
        assert_eq!(
            memorial.critical_types(),
            vec![BloodType::AbNegative, BloodType::ONegative]
        );
    }
}
