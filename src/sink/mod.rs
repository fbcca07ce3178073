//! Sink Module
//!
//! Destinations for captured search errors. The recorder only knows the
//! `ErrorSink` trait; nothing a sink does can fail a recording.

mod logging;
mod monitoring;

pub use logging::LoggingSink;
pub use monitoring::{
    MonitoringClient, MonitoringSink, SinkError, DEFAULT_QUEUE_CAPACITY, MONITORING_PATH,
};

use crate::recorder::SearchError;

// == Error Sink ==
/// Consumer of captured error records.
///
/// Implementations must not block or panic; delivery problems are handled
/// inside the sink.
pub trait ErrorSink: Send + Sync {
    fn dispatch(&self, record: &SearchError);
}
