//! Logging Sink
//!
//! Routes records by deployment environment.

use tracing::{error, trace};

use crate::config::Environment;
use crate::recorder::SearchError;
use crate::sink::{ErrorSink, MonitoringSink};

/// Development: log the record. Production: forward to monitoring.
/// Any other environment: do nothing.
#[derive(Debug, Clone)]
pub struct LoggingSink {
    environment: Environment,
    monitor: MonitoringSink,
}

impl LoggingSink {
    pub fn new(environment: Environment, monitor: MonitoringSink) -> Self {
        Self {
            environment,
            monitor,
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }
}

impl ErrorSink for LoggingSink {
    fn dispatch(&self, record: &SearchError) {
        match self.environment {
            Environment::Development => {
                let context = serde_json::Value::Object(record.context.clone());
                error!(
                    code = %record.code,
                    timestamp = %record.timestamp.to_rfc3339(),
                    context = %context,
                    "Image search error: {}",
                    record.message
                );
            }
            Environment::Production => self.monitor.dispatch(record),
            Environment::Other => {
                trace!(code = %record.code, "Environment not configured, record not exported");
            }
        }
    }
}
