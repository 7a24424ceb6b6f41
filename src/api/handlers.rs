//! HTTP request handlers for the calculation API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::{calculate, project};
use crate::error::EngineError;
use crate::models::PayrollInput;

use super::request::{ProjectionRequest, SalaryRequest};
use super::response::{ApiError, ApiErrorResponse, ApiSuccess, HealthResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/calculate", post(calculate_pension_handler))
        .route("/api/calculate-salary", post(calculate_salary_handler))
        .route("/api/health", get(health_handler))
        .with_state(state)
}

/// Binds `address` and serves the API until the process is stopped.
pub async fn serve(state: AppState, address: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(address).await?;
    info!(
        address = %listener.local_addr()?,
        service = %state.service_name(),
        "Calculation API listening"
    );
    axum::serve(listener, create_router(state)).await
}

/// Handler for GET /api/health.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now(),
        service: state.service_name().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for POST /api/calculate.
///
/// Projects a pension fund under the current and the alternative fees and
/// returns the result wrapped in `{ success: true, data }`.
async fn calculate_pension_handler(
    payload: Result<Json<ProjectionRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pension projection request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let result = request.into_input().and_then(|input| project(&input));

    match result {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                months = result.months_to_retirement,
                savings = result.savings,
                duration_us = start_time.elapsed().as_micros(),
                "Pension projection completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiSuccess::new(result)),
            )
                .into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /api/calculate-salary.
///
/// Converts a monthly compensation structure from gross to net and returns the
/// result directly.
async fn calculate_salary_handler(
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let input: PayrollInput = request.into();

    let start_time = Instant::now();
    match calculate(&input) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                total_gross = %result.total_gross,
                net_salary = %result.net_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Salary calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Logs an engine error and converts it into an HTTP response.
fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    match &err {
        EngineError::InvalidParameters { .. } => {
            warn!(correlation_id = %correlation_id, error = %err, "Validation failed");
        }
        _ => {
            error!(correlation_id = %correlation_id, error = %err, "Calculation failed");
        }
    }
    ApiErrorResponse::from(err).into_response()
}

/// Converts a JSON extraction failure into a `400` response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::missing_field(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}
