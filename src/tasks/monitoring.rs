//! Monitoring Delivery Task
//!
//! Background task that drains queued error records to the monitoring service.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::recorder::SearchError;
use crate::sink::MonitoringClient;

/// Spawns the task that POSTs queued records to the monitoring endpoint.
///
/// Each record is attempted once. Failures are logged and the record is
/// dropped; the task keeps going. The task ends when every `MonitoringSink`
/// feeding `rx` has been dropped, or when the returned handle is aborted
/// during shutdown.
///
/// # Example
/// ```ignore
/// let (sink, rx) = MonitoringSink::channel(1_000);
/// let client = MonitoringClient::new("http://monitor.local", Duration::from_secs(5))?;
/// let handle = spawn_monitoring_task(rx, client);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_monitoring_task(
    mut rx: mpsc::Receiver<SearchError>,
    client: MonitoringClient,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting monitoring delivery task for {}", client.endpoint());

        while let Some(record) = rx.recv().await {
            match client.send(&record).await {
                Ok(()) => debug!(code = %record.code, "Error report delivered"),
                Err(e) => warn!(code = %record.code, error = %e, "Failed to send error to monitoring"),
            }
        }

        info!("Monitoring delivery task stopped");
    })
}
