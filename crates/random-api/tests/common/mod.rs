//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use random_core::transport::Transport;
use random_range::domain::endpoint::IntegerEndpoint;
use random_test_support::StubTransport;
use tower::ServiceExt;

use random_api::routes;
use random_api::state::AppState;

/// Build the full app router around `transport`. Uses the same route
/// structure as `main.rs`.
pub fn build_test_app_with_transport(transport: Arc<dyn Transport>) -> Router {
    let app_state = AppState::new(transport, IntegerEndpoint::default());

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/random", routes::random::router())
        .with_state(app_state)
}

/// Build the full app router with a stub transport answering `body`.
pub fn build_test_app(body: &str) -> Router {
    build_test_app_with_transport(Arc::new(StubTransport::new(body)))
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
