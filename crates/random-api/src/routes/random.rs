//! Routes for the Random node.

use axum::extract::State;
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use random_core::policy::FailurePolicy;
use random_range::application::command_handlers;
use random_range::domain::commands;
use random_range::domain::description::{self, NodeDescription, Operation};
use random_range::domain::outcome::ItemOutcome;

use crate::error::ApiError;
use crate::source::{JsonItemSource, ParameterSet};
use crate::state::AppState;

/// Request body for POST /generate.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Operation to run; `generate` when omitted.
    #[serde(default)]
    pub operation: Option<String>,
    /// Input items, opaque apart from parameter field references.
    #[serde(default)]
    pub items: Vec<Value>,
    /// How `min` and `max` are resolved per item.
    #[serde(default)]
    pub parameters: ParameterSet,
    /// Record per-item failures instead of aborting the batch.
    #[serde(default)]
    pub continue_on_fail: bool,
}

/// Response body returned after a batch is resolved.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// Correlation ID of the batch.
    pub correlation_id: Uuid,
    /// One result per input item, in input order.
    pub results: Vec<ItemOutcome>,
}

/// GET /description
async fn node_description() -> Json<NodeDescription> {
    Json(description::describe())
}

/// POST /generate
#[instrument(skip(state, request), fields(items = request.items.len()))]
async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let operation = request
        .operation
        .as_deref()
        .map(str::parse::<Operation>)
        .transpose()?
        .unwrap_or_default();

    match operation {
        Operation::Generate => {
            let command = commands::GenerateRandomNumbers {
                correlation_id: Uuid::new_v4(),
            };

            info!(correlation_id = %command.correlation_id, "handling generate command");

            let source = JsonItemSource::new(
                request.items,
                request.parameters,
                FailurePolicy::from_continue_on_fail(request.continue_on_fail),
            );

            let results = command_handlers::handle_generate(
                &command,
                &source,
                state.transport.as_ref(),
                &state.endpoint,
            )
            .await?;

            Ok(Json(GenerateResponse {
                correlation_id: command.correlation_id,
                results,
            }))
        }
    }
}

/// Returns the router for the Random node.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/description", get(node_description))
        .route("/generate", post(generate))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use random_core::transport::Transport;
    use random_range::domain::endpoint::IntegerEndpoint;
    use random_test_support::{FailingTransport, StubTransport};
    use serde_json::json;
    use tower::ServiceExt;

    fn app_state_with(transport: Arc<dyn Transport>) -> AppState {
        AppState::new(transport, IntegerEndpoint::default())
    }

    async fn post_generate(state: AppState, body: &Value) -> (StatusCode, Value) {
        let app = router().with_state(state);
        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    #[tokio::test]
    async fn test_generate_returns_200_with_results() {
        // Arrange
        let transport = Arc::new(StubTransport::new("57"));
        let body = json!({
            "items": [{}],
            "parameters": { "min": 1, "max": 100 }
        });

        // Act
        let (status, json) = post_generate(app_state_with(transport.clone()), &body).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["results"], json!([{ "randomNumber": 57 }]));
        Uuid::parse_str(json["correlation_id"].as_str().unwrap()).unwrap();
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_generate_uses_node_defaults_when_parameters_omitted() {
        // Arrange
        let transport = Arc::new(StubTransport::new("42"));
        let body = json!({ "items": [{ "name": "a" }] });

        // Act
        let (status, _) = post_generate(app_state_with(transport.clone()), &body).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        let urls = transport.requested_urls();
        assert_eq!(urls.len(), 1);
        assert!(urls[0].contains("min=1&max=100"));
    }

    #[tokio::test]
    async fn test_generate_continue_on_fail_keeps_one_result_per_item() {
        // Arrange
        let transport = Arc::new(StubTransport::new("7"));
        let body = json!({
            "items": [
                { "lo": 1, "hi": 1 },
                { "lo": 5, "hi": 1 },
                { "lo": 1, "hi": 10 }
            ],
            "parameters": { "min": { "field": "lo" }, "max": { "field": "hi" } },
            "continue_on_fail": true
        });

        // Act
        let (status, json) = post_generate(app_state_with(transport.clone()), &body).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["results"],
            json!([
                { "randomNumber": 1 },
                {
                    "error": "Minimum value cannot be greater than the maximum value.",
                    "itemIndex": 1
                },
                { "randomNumber": 7 }
            ])
        );
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_generate_returns_400_when_range_is_inverted() {
        // Arrange
        let transport = Arc::new(StubTransport::new("7"));
        let body = json!({
            "items": [{}],
            "parameters": { "min": 5, "max": 1 }
        });

        // Act
        let (status, json) = post_generate(app_state_with(transport.clone()), &body).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_range");
        assert_eq!(json["item_index"], 0);
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_generate_returns_502_for_invalid_api_response() {
        // Arrange
        let body = json!({ "items": [{}] });

        // Act
        let (status, json) =
            post_generate(app_state_with(Arc::new(StubTransport::new("not-a-number"))), &body)
                .await;

        // Assert
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"], "invalid_api_response");
        assert_eq!(
            json["message"],
            "The API returned an invalid response: not-a-number"
        );
    }

    #[tokio::test]
    async fn test_generate_returns_502_when_transport_fails() {
        // Arrange
        let body = json!({ "items": [{}] });

        // Act
        let (status, json) =
            post_generate(app_state_with(Arc::new(FailingTransport::default())), &body).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"], "transport_failure");
    }

    #[tokio::test]
    async fn test_generate_returns_400_for_unknown_operation() {
        // Arrange
        let body = json!({ "operation": "shuffle", "items": [{}] });

        // Act
        let (status, json) =
            post_generate(app_state_with(Arc::new(StubTransport::new("1"))), &body).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "unknown_operation");
    }

    #[tokio::test]
    async fn test_generate_returns_422_for_malformed_parameters() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(StubTransport::new("1"))));
        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"parameters":{"min":"low"}}"#))
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert — Axum returns 422 for deserialization failures.
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_description_lists_generate_operation() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(StubTransport::new("1"))));
        let request = Request::builder()
            .method("GET")
            .uri("/description")
            .body(Body::empty())
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(json["name"], "random");
        assert_eq!(json["operations"][0]["value"], "generate");
    }
}
