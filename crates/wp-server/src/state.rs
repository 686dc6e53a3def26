use std::sync::Arc;

use wp_auth::{PasswordGate, TokenSet};
use wp_config::WaypointConfig;
use wp_store::{Store, StoreError, TravelService};

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TravelService<Store>>,
    pub gate: PasswordGate,
}

impl AppState {
    #[must_use]
    pub fn new(service: TravelService<Store>, gate: PasswordGate) -> Self {
        Self {
            service: Arc::new(service),
            gate,
        }
    }

    /// Build the configured store and an empty token set.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be constructed.
    pub fn from_config(config: &WaypointConfig) -> Result<Self, StoreError> {
        let store = Store::from_config(config)?;
        let gate = PasswordGate::new(config.auth.password.clone(), TokenSet::new());
        Ok(Self::new(TravelService::new(store), gate))
    }
}
