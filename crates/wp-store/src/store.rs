//! The storage seam and the config-selected store.

use std::future::Future;
use std::path::PathBuf;

use wp_config::{StorageBackend, WaypointConfig};
use wp_core::entities::TravelData;

use crate::error::StoreError;
use crate::file::FileStore;
use crate::github::GitHubStore;

/// Somewhere the whole travel document can be read from and written to.
///
/// Methods take `&mut self` so stores can keep caches; callers serialize
/// access (see [`crate::TravelService`]).
pub trait DataStore: Send {
    fn load(&mut self) -> impl Future<Output = Result<TravelData, StoreError>> + Send;

    fn save(&mut self, data: &TravelData) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Human-readable location, for logs and CLI output.
    fn describe(&self) -> String;
}

/// The store chosen by configuration.
#[derive(Debug)]
pub enum Store {
    File(FileStore),
    GitHub(GitHubStore),
}

impl Store {
    /// Build the store `config.storage_backend()` selects.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Http` if the GitHub HTTP client cannot be built.
    pub fn from_config(config: &WaypointConfig) -> Result<Self, StoreError> {
        match config.storage_backend() {
            StorageBackend::File => Ok(Self::File(FileStore::new(
                PathBuf::from(&config.storage.data_file),
                config.storage.create_missing,
            ))),
            StorageBackend::Github => Ok(Self::GitHub(GitHubStore::new(&config.github)?)),
        }
    }
}

impl DataStore for Store {
    async fn load(&mut self) -> Result<TravelData, StoreError> {
        match self {
            Self::File(store) => store.load().await,
            Self::GitHub(store) => store.load().await,
        }
    }

    async fn save(&mut self, data: &TravelData) -> Result<(), StoreError> {
        match self {
            Self::File(store) => store.save(data).await,
            Self::GitHub(store) => store.save(data).await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::File(store) => store.describe(),
            Self::GitHub(store) => store.describe(),
        }
    }
}
