//! Emergency alert simulation.
//!
//! One emergency at a time, modeled as an explicit state machine:
//! idle (no event), active, resolved. Transitions are pure functions
//! on the event value; a background ticker task drives the simulated
//! donor responses and countdown. The ticker's cancellation is owned
//! by the `Simulator` — resolve, reset and drop all stop it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::str_enum;
use crate::models::BloodType;

/// Countdown assigned to a fresh emergency, minutes.
pub const COUNTDOWN_MINUTES: u32 = 60;
/// Donors notified on activation fall in this range.
pub const NOTIFIED_MIN: u32 = 30;
pub const NOTIFIED_MAX: u32 = 50;
/// Default wall-clock spacing between simulation ticks.
pub const DEFAULT_TICK: Duration = Duration::from_secs(3);
/// Ticks per simulated countdown minute, at the default 3-second tick.
const TICKS_PER_MINUTE: u32 = 20;

str_enum!(EmergencyStatus {
    Active => "active",
    Resolved => "resolved",
});

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyEvent {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub blood_types_needed: Vec<BloodType>,
    /// Minutes left on the response countdown.
    pub time_remaining: u32,
    pub donors_notified: u32,
    pub donors_responded: u32,
    pub status: EmergencyStatus,
    #[serde(skip)]
    ticks: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmergency {
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_blood_types")]
    pub blood_types: Vec<BloodType>,
}

fn default_kind() -> String {
    "Mass Casualty".into()
}

fn default_location() -> String {
    "Downtown Medical Center".into()
}

fn default_blood_types() -> Vec<BloodType> {
    vec![BloodType::ONegative, BloodType::OPositive, BloodType::ANegative]
}

impl Default for CreateEmergency {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            location: default_location(),
            blood_types: default_blood_types(),
        }
    }
}

impl EmergencyEvent {
    /// Idle → Active. Responded starts at zero.
    pub fn activate<R: Rng>(request: &CreateEmergency, rng: &mut R) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: request.kind.clone(),
            location: request.location.clone(),
            blood_types_needed: request.blood_types.clone(),
            time_remaining: COUNTDOWN_MINUTES,
            donors_notified: rng.gen_range(NOTIFIED_MIN..=NOTIFIED_MAX),
            donors_responded: 0,
            status: EmergencyStatus::Active,
            ticks: 0,
        }
    }

    /// Active → Active. One more donor responds (capped at notified);
    /// the countdown loses a minute every `TICKS_PER_MINUTE` ticks.
    pub fn tick(&mut self) {
        if self.status != EmergencyStatus::Active {
            return;
        }
        if self.donors_responded < self.donors_notified {
            self.donors_responded += 1;
        }
        self.ticks += 1;
        if self.ticks % TICKS_PER_MINUTE == 0 && self.time_remaining > 0 {
            self.time_remaining -= 1;
        }
    }

    /// Active → Resolved.
    pub fn resolve(&mut self) {
        self.status = EmergencyStatus::Resolved;
    }

    /// Whether further ticks can still change anything.
    pub fn exhausted(&self) -> bool {
        self.status != EmergencyStatus::Active
            || (self.donors_responded >= self.donors_notified && self.time_remaining == 0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EmergencyError {
    #[error("an emergency is already active")]
    AlreadyActive,
    #[error("no active emergency")]
    NoneActive,
    #[error("emergency state lock poisoned")]
    LockPoisoned,
}

// ═══════════════════════════════════════════════════════════
// Simulator — state + owned ticker
// ═══════════════════════════════════════════════════════════

/// Holds the current emergency (if any) and the ticker task driving
/// it. All mutation goes through the transition methods.
pub struct Simulator {
    current: Arc<Mutex<Option<EmergencyEvent>>>,
    ticker: Mutex<Option<tokio::task::JoinHandle<()>>>,
    tick_interval: Duration,
}

impl Simulator {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            ticker: Mutex::new(None),
            tick_interval,
        }
    }

    /// Activate a new emergency and start its ticker. Fails while
    /// another emergency is active.
    pub fn create(&self, request: &CreateEmergency) -> Result<EmergencyEvent, EmergencyError> {
        let event = {
            let mut guard = self.lock_current()?;
            if matches!(&*guard, Some(e) if e.status == EmergencyStatus::Active) {
                return Err(EmergencyError::AlreadyActive);
            }
            let event = EmergencyEvent::activate(request, &mut rand::thread_rng());
            *guard = Some(event.clone());
            event
        };

        self.start_ticker();
        tracing::info!(
            kind = %event.kind,
            location = %event.location,
            notified = event.donors_notified,
            blood_types = ?event.blood_types_needed,
            "emergency alert activated"
        );
        Ok(event)
    }

    /// Snapshot of the current event, if any.
    pub fn current(&self) -> Result<Option<EmergencyEvent>, EmergencyError> {
        Ok(self.lock_current()?.clone())
    }

    /// Active → Resolved. Stops the ticker.
    pub fn resolve(&self) -> Result<EmergencyEvent, EmergencyError> {
        let event = {
            let mut guard = self.lock_current()?;
            match guard.as_mut() {
                Some(event) if event.status == EmergencyStatus::Active => {
                    event.resolve();
                    event.clone()
                }
                _ => return Err(EmergencyError::NoneActive),
            }
        };
        self.stop_ticker();
        tracing::info!(kind = %event.kind, responded = event.donors_responded, "emergency resolved");
        Ok(event)
    }

    /// Any state → Idle. Stops the ticker.
    pub fn reset(&self) -> Result<(), EmergencyError> {
        *self.lock_current()? = None;
        self.stop_ticker();
        Ok(())
    }

    fn lock_current(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, Option<EmergencyEvent>>, EmergencyError> {
        self.current.lock().map_err(|_| EmergencyError::LockPoisoned)
    }

    fn start_ticker(&self) {
        let current = Arc::clone(&self.current);
        let interval = self.tick_interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first interval tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let done = {
                    let Ok(mut guard) = current.lock() else { break };
                    match guard.as_mut() {
                        Some(event) if event.status == EmergencyStatus::Active => {
                            event.tick();
                            event.exhausted()
                        }
                        _ => true,
                    }
                };
                if done {
                    break;
                }
            }
        });

        if let Ok(mut slot) = self.ticker.lock() {
            if let Some(old) = slot.replace(handle) {
                old.abort();
            }
        }
    }

    fn stop_ticker(&self) {
        if let Ok(mut slot) = self.ticker.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }
}

impl Drop for Simulator {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn active_event() -> EmergencyEvent {
        let mut rng = StdRng::seed_from_u64(21);
        EmergencyEvent::activate(&CreateEmergency::default(), &mut rng)
    }

    #[test]
    fn activation_invariants() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let event = EmergencyEvent::activate(&CreateEmergency::default(), &mut rng);
            assert_eq!(event.donors_responded, 0);
            assert!((NOTIFIED_MIN..=NOTIFIED_MAX).contains(&event.donors_notified));
            assert_eq!(event.time_remaining, COUNTDOWN_MINUTES);
            assert_eq!(event.status, EmergencyStatus::Active);
        }
    }

    #[test]
    fn responded_is_monotone_and_capped() {
        let mut event = active_event();
        let mut previous = 0;
        for _ in 0..5_000 {
            event.tick();
            assert!(event.donors_responded >= previous);
            assert!(event.donors_responded <= event.donors_notified);
            previous = event.donors_responded;
        }
        assert_eq!(event.donors_responded, event.donors_notified);
    }

    #[test]
    fn countdown_reaches_zero_and_stops() {
        let mut event = active_event();
        for _ in 0..(COUNTDOWN_MINUTES * TICKS_PER_MINUTE) {
            event.tick();
        }
        assert_eq!(event.time_remaining, 0);
        event.tick();
        assert_eq!(event.time_remaining, 0);
        assert!(event.exhausted());
    }

    #[test]
    fn ticks_after_resolve_change_nothing() {
        let mut event = active_event();
        event.tick();
        event.resolve();
        let responded = event.donors_responded;
        let remaining = event.time_remaining;
        event.tick();
        assert_eq!(event.donors_responded, responded);
        assert_eq!(event.time_remaining, remaining);
    }

    #[test]
    fn wire_shape_uses_type_key() {
        let json = serde_json::to_value(active_event()).unwrap();
        assert_eq!(json["type"], "Mass Casualty");
        assert_eq!(json["status"], "active");
        assert_eq!(json["donorsResponded"], 0);
        assert_eq!(json["bloodTypesNeeded"][0], "O-");
        assert!(json.get("ticks").is_none());
    }

    #[tokio::test]
    async fn simulator_rejects_second_create() {
        let sim = Simulator::new(Duration::from_secs(3600));
        sim.create(&CreateEmergency::default()).unwrap();
        let err = sim.create(&CreateEmergency::default()).unwrap_err();
        assert!(matches!(err, EmergencyError::AlreadyActive));
    }

    #[tokio::test]
    async fn simulator_resolve_then_create_again() {
        let sim = Simulator::new(Duration::from_secs(3600));
        sim.create(&CreateEmergency::default()).unwrap();
        let resolved = sim.resolve().unwrap();
        assert_eq!(resolved.status, EmergencyStatus::Resolved);
        // Resolved state still blocks nothing — a new event may start.
        sim.create(&CreateEmergency::default()).unwrap();
        assert_eq!(sim.current().unwrap().unwrap().status, EmergencyStatus::Active);
    }

    #[tokio::test]
    async fn simulator_reset_clears_state() {
        let sim = Simulator::new(Duration::from_secs(3600));
        sim.create(&CreateEmergency::default()).unwrap();
        sim.reset().unwrap();
        assert!(sim.current().unwrap().is_none());
        assert!(matches!(sim.resolve().unwrap_err(), EmergencyError::NoneActive));
    }

    #[tokio::test]
    async fn ticker_advances_responses() {
        let sim = Simulator::new(Duration::from_millis(5));
        sim.create(&CreateEmergency::default()).unwrap();
        tokio::time::sleep(Duration::from_millis(120)).await;
        let event = sim.current().unwrap().unwrap();
        assert!(event.donors_responded > 0, "ticker never fired");
        sim.reset().unwrap();
    }
}
