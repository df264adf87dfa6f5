//! Application state shared by all handlers

use std::sync::Arc;
use workstate_config::{ConfigResult, WorkstateConfig};
use workstate_core::AccountService;
use workstate_store::MemoryStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
}

impl AppState {
    pub fn new(accounts: AccountService) -> Self {
        Self { accounts }
    }

    /// Build state over a fresh in-memory store from configuration
    pub fn from_config(config: &WorkstateConfig) -> ConfigResult<Self> {
        let store = Arc::new(MemoryStore::new());
        let accounts = AccountService::new(
            store,
            config.auth.password_hasher()?,
            config.auth.token_issuer()?,
            config.auth.login_ttl()?,
        );
        Ok(Self::new(accounts))
    }
}
