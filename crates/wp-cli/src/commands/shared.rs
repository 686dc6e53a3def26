use std::path::Path;

use anyhow::Context;
use wp_config::WaypointConfig;
use wp_core::entities::TravelData;
use wp_store::{DataStore, FileStore, Store};

/// Load a document from `data_file`, or from the configured store when no
/// file is given. Returns the store description alongside the data.
///
/// An explicit file must exist.
pub async fn load_document(
    config: &WaypointConfig,
    data_file: Option<&Path>,
) -> anyhow::Result<(String, TravelData)> {
    let mut store = match data_file {
        Some(path) => Store::File(FileStore::new(path.to_path_buf(), false)),
        None => Store::from_config(config).context("failed to open the configured store")?,
    };
    let source = store.describe();
    let data = store
        .load()
        .await
        .with_context(|| format!("failed to load {source}"))?;
    Ok((source, data))
}
