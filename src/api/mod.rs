//! API Module
//!
//! HTTP handlers and routing for the search cache and error recorder.
//!
//! # Endpoints
//! - `PUT /set` - Store a key-value pair
//! - `GET /get/:key` - Retrieve a value by key
//! - `DELETE /clear` - Empty the cache
//! - `GET /stats` - Get cache statistics
//! - `POST /errors` - Capture a search failure
//! - `GET /errors/stats` - Error totals and recent records
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
