//! Random node API — error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use random_core::error::{ItemError, RandomError, TransportError};
use random_range::domain::description::UnknownOperation;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The outbound HTTP client could not be built.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
    /// Index of the item that aborted the batch, when one did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_index: Option<usize>,
}

/// HTTP-layer error that implements `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// An item failed and the batch was not allowed to continue.
    Item(ItemError),
    /// The request named an operation the node does not offer.
    UnknownOperation(UnknownOperation),
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        Self::Item(err)
    }
}

impl From<UnknownOperation> for ApiError {
    fn from(err: UnknownOperation) -> Self {
        Self::UnknownOperation(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Item(err) => {
                let (status, error_code) = match &err.source {
                    RandomError::InvalidRange { .. } => (StatusCode::BAD_REQUEST, "invalid_range"),
                    RandomError::Parameter { .. } => {
                        (StatusCode::BAD_REQUEST, "invalid_parameter")
                    }
                    RandomError::InvalidApiResponse { .. } => {
                        (StatusCode::BAD_GATEWAY, "invalid_api_response")
                    }
                    RandomError::Transport(_) => (StatusCode::BAD_GATEWAY, "transport_failure"),
                };
                let body = ErrorBody {
                    error: error_code,
                    message: err.source.to_string(),
                    item_index: Some(err.item_index),
                };
                (status, body)
            }
            Self::UnknownOperation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "unknown_operation",
                    message: err.to_string(),
                    item_index: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
