//! Dashboard payload builders.
//!
//! The donor and hospital dashboards render large fixed payloads; the
//! only derived piece is the donor's 56-day eligibility countdown,
//! computed against the request date. Everything else is the demo
//! fixture.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::str_enum;
use crate::models::{BloodType, Demand};

/// Days between whole-blood donations.
pub const DONATION_INTERVAL_DAYS: i64 = 56;

// ═══════════════════════════════════════════════════════════
// Donor dashboard
// ═══════════════════════════════════════════════════════════

str_enum!(DonationStatus {
    Completed => "completed",
    Scheduled => "scheduled",
});

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    pub date: NaiveDate,
    pub location: &'static str,
    /// Milliliters collected.
    pub blood_volume: u32,
    pub status: DonationStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodDrive {
    pub id: u32,
    pub name: &'static str,
    pub date: NaiveDate,
    pub distance: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactStats {
    pub lives_saved: u32,
    pub hospitals_helped: u32,
    pub total_blood_volume: String,
    pub donor_rank: &'static str,
    pub percentile: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorDashboard {
    pub id: String,
    pub name: &'static str,
    pub email: &'static str,
    pub blood_type: BloodType,
    pub address: &'static str,
    pub phone: &'static str,
    pub date_of_birth: NaiveDate,
    pub gender: &'static str,
    pub created_at: NaiveDate,
    pub last_donation: Option<NaiveDate>,
    pub eligible_to_donate_days: u32,
    pub next_eligible_date: NaiveDate,
    pub donation_streak: u32,
    pub badges: Vec<&'static str>,
    pub donation_history: Vec<DonationRecord>,
    pub impact_stats: ImpactStats,
    pub nearby_drives: Vec<BloodDrive>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date")
}

fn donation_history() -> Vec<DonationRecord> {
    let completed = |y, m, d, location| DonationRecord {
        date: date(y, m, d),
        location,
        blood_volume: 450,
        status: DonationStatus::Completed,
    };
    vec![
        completed(2024, 5, 15, "Central Hospital"),
        completed(2024, 1, 20, "Community Blood Center"),
        completed(2023, 9, 5, "University Medical Center"),
        completed(2023, 5, 12, "Central Hospital"),
    ]
}

/// Days until the donor may give again, and the date that lands on.
/// Zero days means eligible today.
pub fn eligibility_countdown(last_donation: NaiveDate, today: NaiveDate) -> (u32, NaiveDate) {
    let since = (today - last_donation).num_days();
    let wait = (DONATION_INTERVAL_DAYS - since).max(0) as u32;
    (wait, today + chrono::Duration::days(wait as i64))
}

pub fn donor_dashboard(id: &str, today: NaiveDate) -> DonorDashboard {
    let history = donation_history();
    let last_donation = history.first().map(|record| record.date);
    let (eligible_to_donate_days, next_eligible_date) = last_donation
        .map(|last| eligibility_countdown(last, today))
        .unwrap_or((0, today));

    DonorDashboard {
        id: id.to_string(),
        name: "John Doe",
        email: "john.doe@example.com",
        blood_type: BloodType::OPositive,
        address: "123 Main St, Anytown, USA",
        phone: "(555) 123-4567",
        date_of_birth: date(1990, 1, 15),
        gender: "Male",
        created_at: date(2023, 5, 10),
        last_donation,
        eligible_to_donate_days,
        next_eligible_date,
        donation_streak: 3,
        badges: vec!["First Time Donor", "Regular Donor", "Life Saver"],
        donation_history: history,
        impact_stats: ImpactStats {
            lives_saved: 12,
            hospitals_helped: 3,
            total_blood_volume: "1800 ml".into(),
            donor_rank: "Gold",
            percentile: 85,
        },
        nearby_drives: vec![
            BloodDrive { id: 1, name: "Community Blood Drive", date: date(2024, 7, 20), distance: "0.8 miles" },
            BloodDrive { id: 2, name: "University Hospital Drive", date: date(2024, 7, 25), distance: "1.2 miles" },
            BloodDrive { id: 3, name: "Corporate Blood Drive", date: date(2024, 8, 1), distance: "2.5 miles" },
        ],
    }
}

// ═══════════════════════════════════════════════════════════
// Hospital dashboard
// ═══════════════════════════════════════════════════════════

str_enum!(AlertSeverity {
    Critical => "critical",
    Warning => "warning",
    Info => "info",
});

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryLevel {
    pub blood_type: BloodType,
    pub units: u32,
    pub demand: Demand,
    pub capacity: u32,
    pub expiring_units: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingDonation {
    pub id: &'static str,
    pub date: NaiveDate,
    pub time: &'static str,
    pub donor_name: &'static str,
    pub blood_type: BloodType,
    pub status: DonationStatus,
    pub first_time: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: &'static str,
    pub action: &'static str,
    pub blood_type: BloodType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalAlert {
    #[serde(rename = "type")]
    pub severity: AlertSeverity,
    pub message: &'static str,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStat {
    pub month: &'static str,
    pub donations: u32,
    /// Liters consumed, rounded.
    pub usage: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalStats {
    pub donors_this_month: u32,
    pub blood_collected_l: f64,
    pub patients_helped: u32,
    /// Percent month-over-month.
    pub donation_growth: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub phone: &'static str,
    pub email: &'static str,
    pub website: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalDashboard {
    pub id: String,
    pub name: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub website: &'static str,
    pub license_number: &'static str,
    pub created_at: NaiveDate,
    pub contact_info: ContactInfo,
    pub stats: HospitalStats,
    pub blood_inventory: Vec<InventoryLevel>,
    pub upcoming_donations: Vec<UpcomingDonation>,
    pub emergency_alerts: Vec<HospitalAlert>,
    pub recent_activity: Vec<ActivityRecord>,
    pub monthly_stats: Vec<MonthlyStat>,
}

fn timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("fixture timestamp")
        .with_timezone(&Utc)
}

fn hospital_inventory() -> Vec<InventoryLevel> {
    use BloodType::*;
    use Demand::*;
    [
        (APositive, 25, Low, 50, 2),
        (ANegative, 10, Medium, 30, 0),
        (BPositive, 15, Low, 40, 1),
        (BNegative, 5, Medium, 20, 0),
        (AbPositive, 8, Medium, 15, 0),
        (AbNegative, 3, High, 10, 0),
        (OPositive, 4, High, 60, 0),
        (ONegative, 2, High, 30, 0),
    ]
    .into_iter()
    .map(|(blood_type, units, demand, capacity, expiring_units)| InventoryLevel {
        blood_type,
        units,
        demand,
        capacity,
        expiring_units,
    })
    .collect()
}

/// Milliliters collected this month, the source of every derived stat.
const COLLECTED_ML: u32 = 20_250;
/// One whole-blood donation, milliliters.
const DONATION_ML: u32 = 450;
/// Each donation can help up to three patients.
const PATIENTS_PER_DONATION: u32 = 3;

pub fn hospital_dashboard(id: &str) -> HospitalDashboard {
    use BloodType::*;

    let monthly_source = [
        ("Jul", 45, 20_250),
        ("Jun", 42, 18_900),
        ("May", 38, 17_100),
        ("Apr", 40, 18_000),
        ("Mar", 35, 15_750),
        ("Feb", 30, 13_500),
    ];

    HospitalDashboard {
        id: id.to_string(),
        name: "Central Hospital",
        email: "admin@centralhospital.com",
        address: "456 Medical Center Blvd, Anytown, USA",
        phone: "(555) 987-6543",
        website: "https://centralhospital.com",
        license_number: "MED-12345-HC",
        created_at: date(2022, 3, 15),
        contact_info: ContactInfo {
            phone: "(555) 987-6543",
            email: "admin@centralhospital.com",
            website: "https://centralhospital.com",
        },
        stats: HospitalStats {
            donors_this_month: 45,
            blood_collected_l: f64::from(COLLECTED_ML) / 1000.0,
            patients_helped: COLLECTED_ML / DONATION_ML * PATIENTS_PER_DONATION,
            donation_growth: 12,
        },
        blood_inventory: hospital_inventory(),
        upcoming_donations: vec![
            UpcomingDonation { id: "101", date: date(2024, 7, 15), time: "09:00:00", donor_name: "Alice Smith", blood_type: APositive, status: DonationStatus::Scheduled, first_time: false },
            UpcomingDonation { id: "102", date: date(2024, 7, 15), time: "10:30:00", donor_name: "Bob Johnson", blood_type: ONegative, status: DonationStatus::Scheduled, first_time: true },
            UpcomingDonation { id: "103", date: date(2024, 7, 16), time: "14:00:00", donor_name: "Carol Williams", blood_type: BPositive, status: DonationStatus::Scheduled, first_time: false },
            UpcomingDonation { id: "104", date: date(2024, 7, 17), time: "11:15:00", donor_name: "David Brown", blood_type: AbPositive, status: DonationStatus::Scheduled, first_time: false },
            UpcomingDonation { id: "105", date: date(2024, 7, 18), time: "16:30:00", donor_name: "Emma Davis", blood_type: OPositive, status: DonationStatus::Scheduled, first_time: true },
        ],
        emergency_alerts: vec![
            HospitalAlert {
                severity: AlertSeverity::Critical,
                message: "Urgent need for O- blood type",
                date: date(2024, 7, 10),
                created_at: timestamp("2024-07-10T08:30:00Z"),
            },
            HospitalAlert {
                severity: AlertSeverity::Warning,
                message: "Low inventory for AB- blood type",
                date: date(2024, 7, 9),
                created_at: timestamp("2024-07-09T14:15:00Z"),
            },
            HospitalAlert {
                severity: AlertSeverity::Info,
                message: "Blood drive scheduled for next week",
                date: date(2024, 7, 8),
                created_at: timestamp("2024-07-08T10:45:00Z"),
            },
        ],
        recent_activity: vec![
            ActivityRecord { id: "201", action: "Blood donation received", blood_type: APositive, quantity: Some(450), timestamp: timestamp("2024-07-10T14:30:00Z") },
            ActivityRecord { id: "202", action: "Appointment scheduled", blood_type: ONegative, quantity: None, timestamp: timestamp("2024-07-10T10:15:00Z") },
            ActivityRecord { id: "203", action: "Blood donation received", blood_type: BPositive, quantity: Some(450), timestamp: timestamp("2024-07-09T16:45:00Z") },
            ActivityRecord { id: "204", action: "Status updated", blood_type: AbNegative, quantity: None, timestamp: timestamp("2024-07-09T09:20:00Z") },
            ActivityRecord { id: "205", action: "Blood donation received", blood_type: OPositive, quantity: Some(450), timestamp: timestamp("2024-07-08T11:10:00Z") },
        ],
        monthly_stats: monthly_source
            .into_iter()
            .map(|(month, donations, usage_ml)| MonthlyStat {
                month,
                donations,
                usage: (f64::from(usage_ml as u32) / 1000.0).round() as u32,
            })
            .collect(),
    }
}
