//! Recorder Module
//!
//! Turns image search failures into coded, redacted `SearchError` records.
//!
//! - `fingerprint`: deterministic `IMG_SEARCH_` codes
//! - `redact`: credential masking
//! - `store`: the `ErrorRecorder` and its rolling log

mod fingerprint;
mod record;
mod redact;
mod store;


pub use fingerprint::{generate_error_code, simple_hash, ERROR_CODE_PREFIX};
pub use record::{Failure, SearchError};
pub use redact::sanitize_error_message;
pub use store::{ErrorRecorder, ErrorStats, DEFAULT_LOG_CAPACITY, RECENT_WINDOW_HOURS};
