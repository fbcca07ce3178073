//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_MAX_ENTRIES;
use crate::recorder::DEFAULT_LOG_CAPACITY;
use crate::sink::DEFAULT_QUEUE_CAPACITY;

// == Environment ==
/// Deployment environment, selects where captured errors go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    /// Unset or unrecognized
    #[default]
    Other,
}

impl Environment {
    /// Parses an `ENVIRONMENT` value, case-insensitively.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" => Self::Development,
            "production" => Self::Production,
            _ => Self::Other,
        }
    }
}

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the search cache can hold
    pub cache_max_size: usize,
    /// Maximum number of records kept in the error log
    pub error_log_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Base URL of the monitoring service
    pub monitoring_url: String,
    /// Per-request timeout for monitoring delivery, in seconds
    pub monitoring_timeout: u64,
    /// Maximum number of error reports waiting for monitoring delivery
    pub monitoring_queue_capacity: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: 100)
    /// - `ERROR_LOG_CAPACITY` - Maximum error log length (default: 10000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `ENVIRONMENT` - `development`, `production`, or anything else
    /// - `MONITORING_URL` - Monitoring base URL (default: http://localhost:3000)
    /// - `MONITORING_TIMEOUT` - Delivery timeout in seconds (default: 5)
    /// - `MONITORING_QUEUE_CAPACITY` - Pending report limit, at least 1 (default: 1000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_max_size: parse_var("CACHE_MAX_SIZE").unwrap_or(defaults.cache_max_size),
            error_log_capacity: parse_var("ERROR_LOG_CAPACITY")
                .unwrap_or(defaults.error_log_capacity),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            environment: env::var("ENVIRONMENT")
                .map(|v| Environment::parse(&v))
                .unwrap_or_default(),
            monitoring_url: env::var("MONITORING_URL").unwrap_or(defaults.monitoring_url),
            monitoring_timeout: parse_var("MONITORING_TIMEOUT")
                .unwrap_or(defaults.monitoring_timeout),
            monitoring_queue_capacity: parse_var("MONITORING_QUEUE_CAPACITY")
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.monitoring_queue_capacity),
        }
    }

    pub fn monitoring_timeout(&self) -> Duration {
        Duration::from_secs(self.monitoring_timeout)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_max_size: DEFAULT_MAX_ENTRIES,
            error_log_capacity: DEFAULT_LOG_CAPACITY,
            server_port: 3000,
            environment: Environment::Other,
            monitoring_url: "http://localhost:3000".to_string(),
            monitoring_timeout: 5,
            monitoring_queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}
