use std::path::Path;

use tokio::net::TcpListener;
use tokio::signal;
use wp_config::ServerConfig;

use crate::app::router;
use crate::state::AppState;

/// Bind `config.bind_address()` and serve until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns the I/O error if the address cannot be bound or the server fails.
pub async fn serve(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind_address()).await?;
    serve_on(listener, config, state).await
}

/// Serve on an already-bound listener.
///
/// # Errors
///
/// Returns the I/O error if the server fails.
pub async fn serve_on(
    listener: TcpListener,
    config: &ServerConfig,
    state: AppState,
) -> std::io::Result<()> {
    tracing::info!(
        addr = %listener.local_addr()?,
        store = state.service.location(),
        "waypoint listening"
    );
    let app = router(state, Some(Path::new(&config.client_dist)));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("received SIGTERM, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
