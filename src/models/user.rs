//! Account records for the demo directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::blood::BloodType;
use crate::models::str_enum;

str_enum!(AccountKind {
    Donor => "donor",
    Hospital => "hospital",
    Admin => "admin",
});

/// A registered account. The password is stored and compared as
/// plaintext — parity with the demo site, not a storage scheme.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub name: String,
    pub kind: AccountKind,
    pub blood_type: Option<BloodType>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The account shape returned over the wire. No password field exists
/// here, so a leak by serialization is impossible.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<BloodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Account {
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            kind: self.kind,
            blood_type: self.blood_type,
            location: self.location.clone(),
        }
    }
}
