//! Local JSON file store.
//!
//! The document is written as pretty-printed JSON so it stays diffable when
//! committed. Writes go to a temporary file in the same directory which is
//! then renamed over the target, so a crash mid-write never leaves a
//! truncated document behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use wp_core::entities::TravelData;

use crate::error::StoreError;
use crate::store::DataStore;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    create_missing: bool,
}

impl FileStore {
    /// `create_missing` makes a missing file load as the empty two-city trip.
    #[must_use]
    pub const fn new(path: PathBuf, create_missing: bool) -> Self {
        Self {
            path,
            create_missing,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for FileStore {
    async fn load(&mut self) -> Result<TravelData, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if self.create_missing {
                    tracing::info!(path = %self.path.display(), "document missing; starting empty");
                    return Ok(TravelData::default_trip());
                }
                return Err(StoreError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    async fn save(&mut self, data: &TravelData) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(data)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&path, json.as_bytes()))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))??;
        tracing::debug!(path = %self.path.display(), "document saved");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}
