//! Request and Response models for the HTTP API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.
//! Error records and error stats are serialized directly from the
//! recorder types.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{RecordErrorRequest, SetRequest};
pub use responses::{ClearResponse, GetResponse, HealthResponse, SetResponse, StatsResponse};
