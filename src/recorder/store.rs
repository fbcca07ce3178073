//! Error Recorder Module
//!
//! Builds coded, redacted records from failures and keeps a rolling log.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::recorder::{generate_error_code, sanitize_error_message, Failure, SearchError};
use crate::sink::ErrorSink;

/// Records newer than this are reported as recent
pub const RECENT_WINDOW_HOURS: i64 = 24;

/// Log length used when none is configured
pub const DEFAULT_LOG_CAPACITY: usize = 10_000;

// == Error Stats ==
/// Result of an error log scan.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorStats {
    /// Number of records currently held in the log
    pub total: usize,
    /// Records from the last 24 hours, oldest first
    pub recent: Vec<SearchError>,
}

// == Error Recorder ==
/// Owns the error log and the sink records are routed to.
///
/// The log holds at most `capacity` records; the oldest are dropped first.
pub struct ErrorRecorder {
    log: VecDeque<SearchError>,
    capacity: usize,
    sink: Arc<dyn ErrorSink>,
}

impl ErrorRecorder {
    // == Constructor ==
    /// Creates a recorder with the default log capacity.
    pub fn new(sink: Arc<dyn ErrorSink>) -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY, sink)
    }

    /// Creates a recorder keeping at most `capacity` records.
    pub fn with_capacity(capacity: usize, sink: Arc<dyn ErrorSink>) -> Self {
        Self {
            log: VecDeque::new(),
            capacity,
            sink,
        }
    }

    // == Handle Search Error ==
    /// Captures a failure from a search for `search_query`.
    ///
    /// The record's context starts as `{"searchQuery": search_query}` and the
    /// caller's `context` entries are applied on top, so a caller-supplied
    /// `searchQuery` replaces the query argument. Always returns a record;
    /// sink problems never reach the caller.
    pub fn handle_search_error(
        &mut self,
        failure: &Failure,
        search_query: &str,
        context: Option<Map<String, Value>>,
    ) -> SearchError {
        let mut merged = Map::new();
        merged.insert("searchQuery".to_string(), Value::from(search_query));
        merged.extend(context.unwrap_or_default());

        let record = SearchError {
            code: generate_error_code(failure),
            message: sanitize_error_message(&failure.message),
            timestamp: Utc::now(),
            context: merged,
        };

        self.append(record.clone());
        self.sink.dispatch(&record);
        record
    }

    fn append(&mut self, record: SearchError) {
        if self.capacity == 0 {
            return;
        }
        while self.log.len() >= self.capacity {
            if let Some(dropped) = self.log.pop_front() {
                debug!(code = %dropped.code, "Error log full, dropped oldest record");
            }
        }
        debug!(code = %record.code, "Recorded search error");
        self.log.push_back(record);
    }

    // == Stats ==
    /// Scans the log relative to the current time.
    pub fn error_stats(&self) -> ErrorStats {
        self.error_stats_at(Utc::now())
    }

    /// Scans the log relative to `now`.
    ///
    /// A record is recent when its timestamp is strictly after `now - 24h`.
    pub fn error_stats_at(&self, now: DateTime<Utc>) -> ErrorStats {
        let cutoff = now - Duration::hours(RECENT_WINDOW_HOURS);
        ErrorStats {
            total: self.log.len(),
            recent: self
                .log
                .iter()
                .filter(|record| record.timestamp > cutoff)
                .cloned()
                .collect(),
        }
    }

    /// Iterates over the log, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &SearchError> {
        self.log.iter()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}
