#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use nexa_api::config::{ServerConfig, DEFAULT_MAX_BODY_BYTES};
use nexa_api::router::build_app_router;
use nexa_api::state::AppState;
use nexa_gemini::{DistributionAdvisor, GeminiApi, GeminiConfig};
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// The Gemini key is empty, so distribution requests never leave the process
/// and answer with the fallback message.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        shutdown_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        gemini: GeminiConfig::with_endpoint("", "http://127.0.0.1:9"),
    }
}

/// Build the full application router, with every middleware layer, on top
/// of the given pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_with_config(pool, test_config())
}

/// Same as [`build_test_app`] but with the Gemini client pointed at
/// `base_url` using a non-empty key.
pub fn build_test_app_with_gemini(pool: SqlitePool, base_url: String) -> Router {
    let mut config = test_config();
    config.gemini = GeminiConfig::with_endpoint("test-key", base_url);
    build_app_with_config(pool, config)
}

/// Build the application with an explicit configuration.
pub fn build_app_with_config(pool: SqlitePool, config: ServerConfig) -> Router {
    let api = GeminiApi::new(config.gemini.clone()).expect("client should build");
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        advisor: Arc::new(DistributionAdvisor::new(api)),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

/// POST an arbitrary string body labelled as JSON.
pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A complete staff creation payload.
pub fn staff_payload(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "email": format!("{}@nexa.test", name.to_lowercase()),
        "mobile": "9876543210",
        "degree": "B.Tech",
        "skills": "Rust, SQL",
        "languages": "English, Hindi",
        "father_name": "Father",
        "mother_name": "Mother",
        "country": "India",
        "state": "Karnataka",
        "city": "Bengaluru",
        "address": "12 MG Road",
        "pincode": "560001",
    })
}

/// Create a staff member through the API and return its id.
pub async fn create_staff(pool: &SqlitePool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/staff", staff_payload(name)).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await["id"].as_i64().unwrap()
}
