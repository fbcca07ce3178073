//! Image search support service
//!
//! Serves the search result cache and the error recorder over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imgsearch_support::api::create_router;
use imgsearch_support::sink::{LoggingSink, MonitoringClient, MonitoringSink};
use imgsearch_support::{spawn_monitoring_task, AppState, Config};

/// Main entry point for the service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Start the monitoring delivery task
/// 4. Create cache store and error recorder
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imgsearch_support=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting image search support service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_max_size={}, error_log_capacity={}, port={}, environment={:?}, monitoring_queue_capacity={}",
        config.cache_max_size,
        config.error_log_capacity,
        config.server_port,
        config.environment,
        config.monitoring_queue_capacity
    );

    // Monitoring delivery runs in the background; the recorder only enqueues
    let (monitor, rx) = MonitoringSink::channel(config.monitoring_queue_capacity);
    let client = MonitoringClient::new(&config.monitoring_url, config.monitoring_timeout())?;
    let monitoring_handle = spawn_monitoring_task(rx, client);

    let sink = Arc::new(LoggingSink::new(config.environment, monitor));
    let state = AppState::from_config(&config, sink);
    info!("Cache store and error recorder initialized");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(monitoring_handle))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the monitoring task; undelivered reports are dropped.
async fn shutdown_signal(monitoring_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    monitoring_handle.abort();
    warn!("Monitoring task aborted");
}
