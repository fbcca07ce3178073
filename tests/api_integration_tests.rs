//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use imgsearch_support::{
    api::create_router,
    cache::CacheStore,
    recorder::{ErrorRecorder, SearchError},
    sink::{ErrorSink, LoggingSink, MonitoringSink},
    AppState, Environment,
};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

struct NullSink;

impl ErrorSink for NullSink {
    fn dispatch(&self, _record: &SearchError) {}
}

fn create_test_app(max_entries: usize) -> Router {
    let state = AppState::new(
        CacheStore::new(max_entries),
        ErrorRecorder::new(Arc::new(NullSink)),
    );
    create_router(state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn set_request(key: &str, value: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/set")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "key": key, "value": value }).to_string()))
        .unwrap()
}

fn get_request(key: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/get/{}", key))
        .body(Body::empty())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn error_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/errors")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// == Cache Endpoint Tests ==

#[tokio::test]
async fn test_set_endpoint_success() {
    let app = create_test_app(10);

    let response = app.oneshot(set_request("cats", "page-1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["key"], "cats");
    assert!(json["message"].as_str().unwrap().contains("cats"));
}

#[tokio::test]
async fn test_set_endpoint_empty_key() {
    let app = create_test_app(10);

    let response = app.oneshot(set_request("", "value")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn test_set_then_get() {
    let app = create_test_app(10);

    let set = app.clone().oneshot(set_request("cats", "page-1")).await.unwrap();
    assert_eq!(set.status(), StatusCode::OK);

    let get = app.oneshot(get_request("cats")).await.unwrap();
    assert_eq!(get.status(), StatusCode::OK);
    let json = body_to_json(get.into_body()).await;
    assert_eq!(json["key"], "cats");
    assert_eq!(json["value"], "page-1");
}

#[tokio::test]
async fn test_get_missing_key() {
    let app = create_test_app(10);

    let response = app.oneshot(get_request("missing")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "Key not found: missing");
}

#[tokio::test]
async fn test_lru_eviction_through_api() {
    let app = create_test_app(2);

    app.clone().oneshot(set_request("a", "1")).await.unwrap();
    app.clone().oneshot(set_request("b", "2")).await.unwrap();
    // Refresh "a" so "b" becomes least recently used
    app.clone().oneshot(get_request("a")).await.unwrap();
    app.clone().oneshot(set_request("c", "3")).await.unwrap();

    let a = app.clone().oneshot(get_request("a")).await.unwrap();
    let b = app.clone().oneshot(get_request("b")).await.unwrap();
    let c = app.clone().oneshot(get_request("c")).await.unwrap();
    assert_eq!(a.status(), StatusCode::OK);
    assert_eq!(b.status(), StatusCode::NOT_FOUND);
    assert_eq!(c.status(), StatusCode::OK);

    let stats = app.oneshot(empty_request("GET", "/stats")).await.unwrap();
    let json = body_to_json(stats.into_body()).await;
    assert_eq!(json["size"], 2);
    assert_eq!(json["max_size"], 2);
    assert_eq!(json["evictions"], 1);
}

#[tokio::test]
async fn test_clear_endpoint() {
    let app = create_test_app(10);

    app.clone().oneshot(set_request("a", "1")).await.unwrap();
    app.clone().oneshot(set_request("b", "2")).await.unwrap();

    let response = app.clone().oneshot(empty_request("DELETE", "/clear")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["removed"], 2);

    let stats = app.oneshot(empty_request("GET", "/stats")).await.unwrap();
    let json = body_to_json(stats.into_body()).await;
    assert_eq!(json["size"], 0);
}

#[tokio::test]
async fn test_stats_hit_rate() {
    let app = create_test_app(10);

    app.clone().oneshot(set_request("a", "1")).await.unwrap();
    app.clone().oneshot(get_request("a")).await.unwrap();
    app.clone().oneshot(get_request("a")).await.unwrap();
    app.clone().oneshot(get_request("a")).await.unwrap();
    app.clone().oneshot(get_request("zzz")).await.unwrap();

    let stats = app.oneshot(empty_request("GET", "/stats")).await.unwrap();
    let json = body_to_json(stats.into_body()).await;
    assert_eq!(json["hits"], 3);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["hit_rate"], 0.75);
}

// == Error Endpoint Tests ==

#[tokio::test]
async fn test_record_error_redacts_and_codes() {
    let app = create_test_app(10);

    let response = app
        .oneshot(error_request(json!({
            "message": "api_key=SECRET123 and token: ABC-999",
            "query": "cats"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["message"], "api_key=*** and token=***");
    assert!(json["code"].as_str().unwrap().starts_with("IMG_SEARCH_"));
    assert_eq!(json["context"]["searchQuery"], "cats");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_record_error_context_override() {
    let app = create_test_app(10);

    let response = app
        .oneshot(error_request(json!({
            "message": "boom",
            "query": "cats",
            "context": { "searchQuery": "dogs", "page": 4 }
        })))
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["context"]["searchQuery"], "dogs");
    assert_eq!(json["context"]["page"], 4);
}

#[tokio::test]
async fn test_same_stack_same_code() {
    let app = create_test_app(10);

    let first = app
        .clone()
        .oneshot(error_request(json!({
            "message": "first message",
            "stack": "at fetch_results (search.rs:42)",
            "query": "cats"
        })))
        .await
        .unwrap();
    let second = app
        .clone()
        .oneshot(error_request(json!({
            "message": "second message",
            "stack": "at fetch_results (search.rs:42)",
            "query": "dogs"
        })))
        .await
        .unwrap();
    let other = app
        .oneshot(error_request(json!({
            "message": "first message",
            "query": "cats"
        })))
        .await
        .unwrap();

    let first = body_to_json(first.into_body()).await;
    let second = body_to_json(second.into_body()).await;
    let other = body_to_json(other.into_body()).await;
    assert_eq!(first["code"], second["code"]);
    assert_ne!(first["code"], other["code"]);
}

#[tokio::test]
async fn test_error_stats_endpoint() {
    let app = create_test_app(10);

    for query in ["cats", "dogs", "birds"] {
        let response = app
            .clone()
            .oneshot(error_request(json!({ "message": "boom", "query": query })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(empty_request("GET", "/errors/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["total"], 3);
    let recent = json["recent"].as_array().unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0]["context"]["searchQuery"], "cats");
    assert_eq!(recent[2]["context"]["searchQuery"], "birds");
}

#[tokio::test]
async fn test_production_records_reach_monitoring_queue() {
    let (monitor, mut rx) = MonitoringSink::channel(16);
    let state = AppState::new(
        CacheStore::new(10),
        ErrorRecorder::new(Arc::new(LoggingSink::new(Environment::Production, monitor))),
    );
    let app = create_router(state);

    let response = app
        .oneshot(error_request(json!({ "message": "password=hunter2", "query": "cats" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let queued = rx.try_recv().unwrap();
    assert_eq!(queued.message, "password=***");
    assert_eq!(queued.search_query(), Some("cats"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(10);

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
}
