use anyhow::Context;
use wp_config::{StorageBackend, WaypointConfig};
use wp_server::AppState;

use crate::cli::root_commands::ServeArgs;

/// Handle `wpt serve`.
pub async fn handle(args: &ServeArgs, mut config: WaypointConfig) -> anyhow::Result<()> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(path) = &args.data_file {
        config.storage.backend = Some(StorageBackend::File);
        config.storage.data_file = path.display().to_string();
    }

    config
        .validate_for_server()
        .context("server configuration is incomplete")?;
    let state = AppState::from_config(&config).context("failed to open the document store")?;

    wp_server::serve(&config.server, state)
        .await
        .with_context(|| format!("server on {} failed", config.server.bind_address()))
}
