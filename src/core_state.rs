//! Shared application state.
//!
//! `CoreState` is the single state value behind the API: the account
//! directory and the emergency simulator. Wrapped in `Arc` at startup;
//! the directory uses `RwLock` so session lookups (the common path)
//! never block each other.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::ServerConfig;
use crate::directory::AccountDirectory;
use crate::emergency::Simulator;

pub struct CoreState {
    directory: RwLock<AccountDirectory>,
    pub emergency: Simulator,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("state lock poisoned")]
    LockPoisoned,
}

impl CoreState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            directory: RwLock::new(AccountDirectory::new(config.login_scheme)),
            emergency: Simulator::new(config.emergency_tick),
        }
    }

    /// Acquire a read lock on the account directory.
    pub fn read_directory(
        &self,
    ) -> Result<RwLockReadGuard<'_, AccountDirectory>, CoreError> {
        self.directory.read().map_err(|_| CoreError::LockPoisoned)
    }

    /// Acquire a write lock on the account directory (login, register,
    /// logout).
    pub fn write_directory(
        &self,
    ) -> Result<RwLockWriteGuard<'_, AccountDirectory>, CoreError> {
        self.directory.write().map_err(|_| CoreError::LockPoisoned)
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new(&ServerConfig::default())
    }
}
