//! Keyword-routed chat assistant.
//!
//! No model behind this: the responder lowercases the message and
//! routes it through ordered category checks, each backed by the
//! static inventory snapshot. Check order is part of the contract —
//! blood type before hospital before process before eligibility,
//! falling back to a greeting.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::inventory::{self, HospitalStock};
use crate::models::BloodType;

const PROCESS_REPLY: &str = "The donation process is simple and takes about an hour. \
    After registration and a quick health check, the actual donation takes only \
    8-10 minutes. Would you like to know more about eligibility or schedule a donation?";

const ELIGIBILITY_REPLY: &str = "Eligibility depends on several factors including age (17+), \
    weight (110+ lbs), health status, and time since last donation (56 days for whole blood). \
    Would you like me to check your specific eligibility?";

const DEFAULT_REPLY: &str = "I'm your LifeLink AI assistant. I can help with information \
    about blood donation, eligibility, finding donation centers, or checking blood type \
    compatibility. How can I assist you today?";

/// Produce a reply for a free-text message.
pub fn respond(message: &str) -> String {
    let lower = message.to_lowercase();

    if lower.contains("blood type") || lower.contains("blood group") {
        return blood_type_reply(&lower);
    }
    if ["hospital", "center", "clinic"].iter().any(|kw| lower.contains(kw)) {
        return hospital_reply(&lower);
    }
    if ["donate", "donation", "process"].iter().any(|kw| lower.contains(kw)) {
        return PROCESS_REPLY.to_string();
    }
    if lower.contains("eligible") || lower.contains("eligibility") || lower.contains("can i donate") {
        return ELIGIBILITY_REPLY.to_string();
    }
    DEFAULT_REPLY.to_string()
}

// ═══════════════════════════════════════════════════════════
// Entity detection
// ═══════════════════════════════════════════════════════════

// "ab" must come before "a" so "ab+" is not read as A with a stray b.
static BLOOD_TYPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(ab|a|b|o)\s*(\+|-|positive|negative)").expect("blood type pattern")
});

/// Find the first blood type mentioned in already-lowercased text.
/// Accepts symbol ("o+") and spoken ("o positive") forms.
pub fn detect_blood_type(lower: &str) -> Option<BloodType> {
    let caps = BLOOD_TYPE_PATTERN.captures(lower)?;
    let group = caps[1].to_uppercase();
    let rh = match &caps[2] {
        "+" | "positive" => "+",
        _ => "-",
    };
    format!("{group}{rh}").parse().ok()
}

/// Find the first partner hospital named in already-lowercased text.
pub fn detect_hospital(lower: &str) -> Option<&'static HospitalStock> {
    inventory::partner_hospitals()
        .iter()
        .find(|h| lower.contains(&h.name.to_lowercase()))
}

// ═══════════════════════════════════════════════════════════
// Category replies
// ═══════════════════════════════════════════════════════════

fn blood_type_reply(lower: &str) -> String {
    let Some(blood_type) = detect_blood_type(lower) else {
        return "What's your blood type? I can tell you about compatibility and \
                current demand."
            .to_string();
    };

    let pressed = inventory::hospitals_needing(blood_type);
    if pressed.is_empty() {
        format!(
            "Your blood type {blood_type} is valuable for donation. The current demand \
             is stable, but regular donations are always appreciated."
        )
    } else {
        format!(
            "Your blood type {blood_type} is currently in high demand at {}. \
             Would you like to schedule a donation?",
            pressed.join(", ")
        )
    }
}

fn hospital_reply(lower: &str) -> String {
    let Some(hospital) = detect_hospital(lower) else {
        return "We partner with several hospitals in the area. Which one would you \
                like information about?"
            .to_string();
    };

    let critical = hospital.critical_types();
    if critical.is_empty() {
        format!(
            "{} has a stable blood supply at the moment, but regular donations are \
             always welcome.",
            hospital.name
        )
    } else {
        let types: Vec<&str> = critical.iter().map(|bt| bt.as_str()).collect();
        format!(
            "{} currently has a critical need for blood types {}. Can you help?",
            hospital.name,
            types.join(", ")
        )
    }
}

// ═══════════════════════════════════════════════════════════
// Prompt suggestions
// ═══════════════════════════════════════════════════════════

/// Prompt suggestion for the empty chat state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptSuggestion {
    pub text: String,
    pub category: String,
}

/// Default prompt suggestions shown before the first message.
pub fn default_prompt_suggestions() -> Vec<PromptSuggestion> {
    vec![
        PromptSuggestion {
            text: "Is my blood type O+ in demand right now?".into(),
            category: "blood-types".into(),
        },
        PromptSuggestion {
            text: "What does Memorial Hospital need most?".into(),
            category: "hospitals".into(),
        },
        PromptSuggestion {
            text: "How does the donation process work?".into(),
            category: "process".into(),
        },
        PromptSuggestion {
            text: "Am I eligible to donate?".into(),
            category: "eligibility".into(),
        },
    ]
}
