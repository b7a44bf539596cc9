//! Application constants and environment-backed server configuration.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use crate::directory::LoginScheme;
use crate::emergency;

pub const APP_NAME: &str = "LifeLink";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_PORT: u16 = 8090;

/// Log filter when `LIFELINK_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "lifelink=info,tower_http=info"
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub login_scheme: LoginScheme,
    /// Wall-clock spacing of emergency simulation ticks.
    pub emergency_tick: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            login_scheme: LoginScheme::DonorHospital,
            emergency_tick: emergency::DEFAULT_TICK,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to
    /// defaults (with a warning) on unparsable values.
    ///
    /// Variables: `LIFELINK_BIND`, `LIFELINK_PORT`,
    /// `LIFELINK_LOGIN_SCHEME` (`donor-hospital` | `user-admin`),
    /// `LIFELINK_EMERGENCY_TICK_SECS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind: env_parsed("LIFELINK_BIND", defaults.bind),
            port: env_parsed("LIFELINK_PORT", defaults.port),
            login_scheme: env_parsed("LIFELINK_LOGIN_SCHEME", defaults.login_scheme),
            emergency_tick: std::env::var("LIFELINK_EMERGENCY_TICK_SECS")
                .ok()
                .and_then(|raw| raw.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.emergency_tick),
        }
    }
}

fn env_parsed<T>(var: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    match std::env::var(var) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(%var, value = %raw, "unparsable setting, using default");
            default
        }),
        Err(_) => default,
    }
}
