//! In-memory account directory.
//!
//! Replaces the demo site's per-request MySQL pool with a seeded,
//! RwLock-guarded store. Credentials are compared as plaintext — the
//! original's behavior, kept for demo parity. Login hands out random
//! bearer tokens; only their hashes are retained.
//!
//! The original shipped two conflicting login handlers, one keyed on
//! donor/hospital accounts and one on user/admin accounts. Both
//! survive here as the `LoginScheme` config variant, which decides how
//! the request's `userType` selects a directory partition.

use std::collections::HashMap;

use base64::Engine;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::models::str_enum;
use crate::models::{Account, AccountKind, BloodType, PublicUser};

str_enum!(LoginScheme {
    DonorHospital => "donor-hospital",
    UserAdmin => "user-admin",
});

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Email is already in use")]
    EmailTaken,
    #[error("Invalid user type")]
    InvalidUserType,
}

/// Registration input, validated by the endpoint before it gets here.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub name: String,
    pub kind: AccountKind,
    pub blood_type: Option<BloodType>,
    pub location: Option<String>,
}

pub struct AccountDirectory {
    scheme: LoginScheme,
    accounts: Vec<Account>,
    /// Token hash → account id.
    sessions: HashMap<[u8; 32], Uuid>,
}

impl AccountDirectory {
    pub fn new(scheme: LoginScheme) -> Self {
        let mut directory = Self {
            scheme,
            accounts: Vec::new(),
            sessions: HashMap::new(),
        };
        directory.seed();
        directory
    }

    /// Demo accounts available out of the box.
    fn seed(&mut self) {
        let seeds = [
            NewAccount {
                email: "donor@example.com".into(),
                password: "donor123".into(),
                name: "John Donor".into(),
                kind: AccountKind::Donor,
                blood_type: Some(BloodType::OPositive),
                location: None,
            },
            NewAccount {
                email: "hospital@example.com".into(),
                password: "hospital123".into(),
                name: "Central Hospital".into(),
                kind: AccountKind::Hospital,
                blood_type: None,
                location: Some("456 Medical Center Blvd, Anytown, USA".into()),
            },
            NewAccount {
                email: "admin@lifelink.org".into(),
                password: "admin123".into(),
                name: "LifeLink Admin".into(),
                kind: AccountKind::Admin,
                blood_type: None,
                location: None,
            },
        ];
        for seed in seeds {
            // Seeding cannot collide on a fresh store.
            let _ = self.insert(seed);
        }
    }

    /// Map a request's `userType` to a directory partition under the
    /// configured scheme. Unknown strings fall to the scheme default,
    /// matching the permissive handlers this replaces.
    pub fn resolve_kind(&self, user_type: &str) -> AccountKind {
        match self.scheme {
            LoginScheme::DonorHospital => match user_type {
                "hospital" => AccountKind::Hospital,
                _ => AccountKind::Donor,
            },
            LoginScheme::UserAdmin => match user_type {
                "admin" => AccountKind::Admin,
                _ => AccountKind::Donor,
            },
        }
    }

    fn insert(&mut self, new: NewAccount) -> Result<PublicUser, DirectoryError> {
        let email = new.email.trim().to_lowercase();
        if self
            .accounts
            .iter()
            .any(|a| a.kind == new.kind && a.email == email)
        {
            return Err(DirectoryError::EmailTaken);
        }
        let account = Account {
            id: Uuid::new_v4(),
            email,
            password: new.password,
            name: new.name,
            kind: new.kind,
            blood_type: new.blood_type,
            location: new.location,
            created_at: Utc::now(),
        };
        let public = account.public();
        self.accounts.push(account);
        Ok(public)
    }

    /// Register a donor or hospital account. Admin accounts cannot be
    /// self-registered.
    pub fn register(&mut self, new: NewAccount) -> Result<PublicUser, DirectoryError> {
        if !matches!(new.kind, AccountKind::Donor | AccountKind::Hospital) {
            return Err(DirectoryError::InvalidUserType);
        }
        self.insert(new)
    }

    /// Authenticate and issue a bearer token.
    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        user_type: &str,
    ) -> Result<(PublicUser, String), DirectoryError> {
        let kind = self.resolve_kind(user_type);
        let email = email.trim().to_lowercase();
        let account = self
            .accounts
            .iter()
            .find(|a| a.kind == kind && a.email == email)
            .ok_or(DirectoryError::InvalidCredentials)?;
        if account.password != password {
            return Err(DirectoryError::InvalidCredentials);
        }

        let token = generate_token();
        self.sessions.insert(hash_token(&token), account.id);
        tracing::debug!(email = %account.email, kind = %account.kind, "login succeeded");
        Ok((account.public(), token))
    }

    /// Look up the account behind an issued token.
    pub fn session_user(&self, token: &str) -> Option<PublicUser> {
        let id = self.sessions.get(&hash_token(token))?;
        self.accounts.iter().find(|a| a.id == *id).map(Account::public)
    }

    /// Forget a token. Returns whether it was known.
    pub fn logout(&mut self, token: &str) -> bool {
        self.sessions.remove(&hash_token(token)).is_some()
    }
}

// ═══════════════════════════════════════════════════════════
// Tokens
// ═══════════════════════════════════════════════════════════

/// Generate a random bearer token (URL-safe base64, 32 bytes of entropy).
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::random();
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Hash a bearer token string using SHA-256.
pub fn hash_token(token: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().into()
}

// ═══════════════════════════════════════════════════════════
// Demo session user
// ═══════════════════════════════════════════════════════════

/// Session payload: the public account plus donor-progress extras the
/// dashboard expects on the demo user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(flatten)]
    pub user: PublicUser,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_donation: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donation_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_to_donate_days: Option<u32>,
}

impl SessionUser {
    pub fn from_public(user: PublicUser) -> Self {
        Self {
            user,
            last_donation: None,
            donation_count: None,
            eligible_to_donate_days: None,
        }
    }
}

/// The fixed mock user the session route falls back to when no issued
/// token is presented.
pub fn demo_session_user() -> SessionUser {
    SessionUser {
        user: PublicUser {
            id: "1".into(),
            name: "John Donor".into(),
            email: "donor@example.com".into(),
            kind: AccountKind::Donor,
            blood_type: Some(BloodType::OPositive),
            location: None,
        },
        last_donation: NaiveDate::from_ymd_opt(2023, 10, 15),
        donation_count: Some(5),
        eligible_to_donate_days: Some(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> AccountDirectory {
        AccountDirectory::new(LoginScheme::DonorHospital)
    }

    #[test]
    fn seeded_donor_can_log_in() {
        let mut dir = directory();
        let (user, token) = dir.login("donor@example.com", "donor123", "donor").unwrap();
        assert_eq!(user.name, "John Donor");
        assert!(!token.is_empty());
    }

    #[test]
    fn login_normalizes_email() {
        let mut dir = directory();
        assert!(dir.login("  Donor@Example.COM ", "donor123", "donor").is_ok());
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let mut dir = directory();
        let err = dir.login("donor@example.com", "nope", "donor").unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidCredentials));
    }

    #[test]
    fn wrong_partition_is_invalid_credentials() {
        let mut dir = directory();
        // The donor account does not exist among hospitals.
        let err = dir
            .login("donor@example.com", "donor123", "hospital")
            .unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidCredentials));
    }

    #[test]
    fn user_admin_scheme_reaches_admin_partition() {
        let mut dir = AccountDirectory::new(LoginScheme::UserAdmin);
        let (user, _) = dir.login("admin@lifelink.org", "admin123", "admin").unwrap();
        assert_eq!(user.kind, AccountKind::Admin);
        // Under the donor/hospital scheme, "admin" falls back to donor
        // and the admin account is unreachable.
        let mut dir = directory();
        assert!(dir.login("admin@lifelink.org", "admin123", "admin").is_err());
    }

    #[test]
    fn register_then_login_round_trip() {
        let mut dir = directory();
        dir.register(NewAccount {
            email: "new@example.com".into(),
            password: "pw".into(),
            name: "New Donor".into(),
            kind: AccountKind::Donor,
            blood_type: Some(BloodType::ANegative),
            location: None,
        })
        .unwrap();
        let (user, _) = dir.login("new@example.com", "pw", "donor").unwrap();
        assert_eq!(user.blood_type, Some(BloodType::ANegative));
    }

    #[test]
    fn duplicate_email_rejected_within_partition() {
        let mut dir = directory();
        let dup = NewAccount {
            email: "donor@example.com".into(),
            password: "x".into(),
            name: "Imposter".into(),
            kind: AccountKind::Donor,
            blood_type: None,
            location: None,
        };
        assert!(matches!(dir.register(dup).unwrap_err(), DirectoryError::EmailTaken));
    }

    #[test]
    fn same_email_allowed_across_partitions() {
        // Two tables in the original, so no cross-table uniqueness.
        let mut dir = directory();
        dir.register(NewAccount {
            email: "donor@example.com".into(),
            password: "x".into(),
            name: "Donor Hospital".into(),
            kind: AccountKind::Hospital,
            blood_type: None,
            location: Some("Elsewhere".into()),
        })
        .unwrap();
    }

    #[test]
    fn admin_registration_rejected() {
        let mut dir = directory();
        let err = dir
            .register(NewAccount {
                email: "evil@example.com".into(),
                password: "x".into(),
                name: "Evil".into(),
                kind: AccountKind::Admin,
                blood_type: None,
                location: None,
            })
            .unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidUserType));
    }

    #[test]
    fn session_token_round_trip() {
        let mut dir = directory();
        let (user, token) = dir.login("donor@example.com", "donor123", "donor").unwrap();
        let found = dir.session_user(&token).unwrap();
        assert_eq!(found.id, user.id);

        assert!(dir.logout(&token));
        assert!(dir.session_user(&token).is_none());
        assert!(!dir.logout(&token));
    }

    #[test]
    fn unknown_token_has_no_session() {
        let dir = directory();
        assert!(dir.session_user("made-up").is_none());
    }

    #[test]
    fn tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }

    #[test]
    fn demo_user_shape() {
        let json = serde_json::to_value(demo_session_user()).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["type"], "donor");
        assert_eq!(json["bloodType"], "O+");
        assert_eq!(json["donationCount"], 5);
        assert_eq!(json["eligibleToDonateDays"], 0);
    }
}
