//! API Handlers
//!
//! HTTP request handlers for the search cache and error recorder endpoints.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    ClearResponse, GetResponse, HealthResponse, RecordErrorRequest, SetRequest, SetResponse,
    StatsResponse,
};
use crate::recorder::{ErrorRecorder, ErrorStats, SearchError};
use crate::sink::ErrorSink;

/// Application state shared across all handlers.
///
/// Cache and recorder are each guarded as one unit, so their internal
/// indexes are never observed out of step.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe search result cache
    pub cache: Arc<RwLock<CacheStore>>,
    /// Thread-safe error recorder
    pub recorder: Arc<RwLock<ErrorRecorder>>,
}

impl AppState {
    /// Creates a new AppState from a cache store and a recorder.
    pub fn new(cache: CacheStore, recorder: ErrorRecorder) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            recorder: Arc::new(RwLock::new(recorder)),
        }
    }

    /// Creates a new AppState from configuration, routing errors to `sink`.
    pub fn from_config(config: &Config, sink: Arc<dyn ErrorSink>) -> Self {
        let cache = CacheStore::new(config.cache_max_size);
        let recorder = ErrorRecorder::with_capacity(config.error_log_capacity, sink);
        Self::new(cache, recorder)
    }
}

/// Handler for PUT /set
///
/// Stores a key-value pair in the cache.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    cache.set(req.key.clone(), req.value);

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value from the cache by key.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    // Write lock: a lookup refreshes recency and updates counters
    let mut cache = state.cache.write().await;
    match cache.get(&key) {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(ApiError::NotFound(key)),
    }
}

/// Handler for DELETE /clear
///
/// Empties the cache.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    let removed = cache.len();
    cache.clear();

    Json(ClearResponse::new(removed))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(cache.stats().into())
}

/// Handler for POST /errors
///
/// Captures a search failure and returns the stored record.
pub async fn record_error_handler(
    State(state): State<AppState>,
    Json(req): Json<RecordErrorRequest>,
) -> Json<SearchError> {
    let failure = req.failure();
    let mut recorder = state.recorder.write().await;
    let record = recorder.handle_search_error(&failure, &req.query, req.context);

    Json(record)
}

/// Handler for GET /errors/stats
///
/// Returns the error total and the records from the last 24 hours.
pub async fn error_stats_handler(State(state): State<AppState>) -> Json<ErrorStats> {
    let recorder = state.recorder.read().await;
    Json(recorder.error_stats())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
