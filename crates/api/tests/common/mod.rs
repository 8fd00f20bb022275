#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use newsreel_api::config::{EditorTimings, ServerConfig};
use newsreel_api::editor::{PgGenerationBackend, SessionManager};
use newsreel_api::router::build_app_router;
use newsreel_api::state::AppState;

/// Timings short enough for HTTP tests to poll through generation.
pub fn fast_timings() -> EditorTimings {
    EditorTimings {
        generation_delay: Duration::from_millis(300),
        tick_interval: Duration::from_millis(100),
        session_idle_ttl: Duration::from_secs(3600),
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        editor: fast_timings(),
    }
}

/// Build the application state backed by `pool`.
pub fn test_state(pool: PgPool) -> AppState {
    let config = test_config();
    let backend = Arc::new(PgGenerationBackend::new(pool.clone()));
    let sessions = Arc::new(SessionManager::new(config.editor, backend));
    AppState {
        pool,
        config: Arc::new(config),
        sessions,
    }
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_for(test_state(pool))
}

/// Build the router over existing state, so several requests can share the
/// same editor sessions.
pub fn build_app_for(state: AppState) -> Router {
    let config = state.config.as_ref().clone();
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
