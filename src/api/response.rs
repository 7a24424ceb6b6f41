//! Response types for the calculation API.
//!
//! This module defines the success envelope, the error body and the mapping
//! from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Success envelope `{ "success": true, "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    /// Always `true`.
    pub success: bool,
    /// The calculation result.
    pub data: T,
}

impl<T> ApiSuccess<T> {
    /// Wraps a result in the success envelope.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// API error response body `{ "success": false, "error": ..., "code": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Always `false`.
    pub success: bool,
    /// Human-readable error message.
    pub error: String,
    /// Error code for programmatic handling.
    pub code: String,
    /// The offending field(s), for validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            code: code.into(),
            field: None,
        }
    }

    /// Creates a validation error naming the offending field(s).
    pub fn invalid_parameters(field: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..Self::new("VALIDATION_ERROR", error)
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(error: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", error)
    }

    /// Creates a missing field error response.
    pub fn missing_field(error: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", error)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A `400 Bad Request` with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidParameters { ref field, .. } => {
                ApiErrorResponse::bad_request(ApiError::invalid_parameters(
                    field.clone(),
                    error.to_string(),
                ))
            }
            // Details are logged by the handler; the caller gets a generic message.
            EngineError::CalculationError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("CALCULATION_ERROR", "Internal calculation error"),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::new("CONFIG_ERROR", "Service configuration error"),
                }
            }
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"OK"`.
    pub status: String,
    /// Time the check was answered.
    pub timestamp: DateTime<Utc>,
    /// Configured service name.
    pub service: String,
    /// Crate version.
    pub version: String,
}
