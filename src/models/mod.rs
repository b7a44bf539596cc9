//! Domain model types shared across the service.
//!
//! Wire-facing types serialize with camelCase field names to match the
//! JSON contract of the public API. Internal-only types stay plain.

pub mod blood;
pub mod donor;
pub mod user;

pub use blood::{BloodType, Demand};
pub use donor::{DonorProfile, MatchedDonor};
pub use user::{Account, AccountKind, PublicUser};

/// Error returned when a wire string does not map to an enum variant.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid {field}: '{value}'")]
pub struct ParseEnumError {
    pub field: &'static str,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The serde rename keeps the wire form identical to the str form.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::models::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(crate::models::ParseEnumError {
                        field: stringify!($name),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use str_enum;
