//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use spacegate_lib::{nasa_api, GatewayError};

/// API error response body for 4xx rejections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// A well-formed request violates a business rule (HTTP 400).
    BadRequest(String),
    /// A parameter is malformed or out of bounds (HTTP 422).
    UnprocessableEntity(String),
    /// The upstream API answered with a failure. Reported inline as an
    /// `{"error": ...}` payload rather than a gateway-level status.
    Upstream(nasa_api::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ApiError::new("BAD_REQUEST", msg)),
            )
                .into_response(),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiError::new("INVALID_PARAMETER", msg)),
            )
                .into_response(),
            AppError::Upstream(e) => {
                let message = match e.status() {
                    Some(status) => format!("NASA API error: {}", status),
                    None => "NASA API request failed".to_string(),
                };
                Json(json!({ "error": message })).into_response()
            }
        }
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Api(e) => AppError::Upstream(e),
            GatewayError::InvalidInput(msg) => AppError::UnprocessableEntity(msg),
            GatewayError::InvalidRange(msg) => AppError::BadRequest(msg),
        }
    }
}
