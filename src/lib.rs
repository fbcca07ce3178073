//! Image search support service
//!
//! A bounded LRU cache for search results, and a recorder that turns search
//! failures into redacted records with deterministic error codes.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod recorder;
pub mod sink;
pub mod tasks;

pub use api::AppState;
pub use config::{Config, Environment};
pub use tasks::spawn_monitoring_task;
