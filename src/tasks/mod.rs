//! Background Tasks Module
//!
//! Contains background tasks that run during server operation.
//!
//! # Tasks
//! - Monitoring delivery: exports queued error records to the monitoring service

mod monitoring;

pub use monitoring::spawn_monitoring_task;
