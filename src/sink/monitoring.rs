//! Monitoring Sink
//!
//! Fire-and-forget export of records to the monitoring service.
//!
//! `MonitoringSink` only enqueues; the background task started by
//! `spawn_monitoring_task` drains the queue through a `MonitoringClient`.
//! The queue is bounded; when it is full new records are dropped.
//! There is no retry and no ordering guarantee beyond queue order.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::warn;

use crate::recorder::SearchError;
use crate::sink::ErrorSink;

/// Path the monitoring service accepts error reports on
pub const MONITORING_PATH: &str = "/api/errors";

/// Queue length used when none is configured
pub const DEFAULT_QUEUE_CAPACITY: usize = 1_000;

// == Sink Error ==
/// Delivery failure for a single record.
#[derive(Error, Debug)]
pub enum SinkError {
    /// Request could not be built, sent, or timed out
    #[error("Monitoring request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Monitoring service answered with a non-success status
    #[error("Monitoring service rejected record with status {0}")]
    Rejected(u16),
}

// == Monitoring Sink ==
/// Enqueues records for the monitoring task without waiting.
#[derive(Debug, Clone)]
pub struct MonitoringSink {
    tx: mpsc::Sender<SearchError>,
}

impl MonitoringSink {
    pub fn new(tx: mpsc::Sender<SearchError>) -> Self {
        Self { tx }
    }

    /// Creates a sink together with the receiver the monitoring task drains.
    ///
    /// At most `capacity` records wait for delivery at once.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<SearchError>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }
}

impl ErrorSink for MonitoringSink {
    fn dispatch(&self, record: &SearchError) {
        match self.tx.try_send(record.clone()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!(code = %record.code, "Monitoring queue full, error report dropped");
            }
            Err(TrySendError::Closed(_)) => {
                warn!(code = %record.code, "Monitoring task stopped, error report dropped");
            }
        }
    }
}

// == Monitoring Client ==
/// HTTP client for the monitoring endpoint.
#[derive(Debug, Clone)]
pub struct MonitoringClient {
    http: reqwest::Client,
    endpoint: String,
}

impl MonitoringClient {
    /// Creates a client posting to `<base_url>/api/errors` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SinkError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), MONITORING_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    // == Send ==
    /// POSTs one record as JSON.
    pub async fn send(&self, record: &SearchError) -> Result<(), SinkError> {
        let response = self.http.post(&self.endpoint).json(record).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SinkError::Rejected(status.as_u16()))
        }
    }
}
