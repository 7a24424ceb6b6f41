//! HTTP API module for the pension and payroll engine.
//!
//! This module provides the REST endpoints that wrap the two calculators:
//! `POST /api/calculate`, `POST /api/calculate-salary` and `GET /api/health`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{create_router, serve};
pub use request::{DEFAULT_TAX_CREDIT_POINTS, ProjectionRequest, SalaryRequest};
pub use response::{ApiError, ApiErrorResponse, ApiSuccess, HealthResponse};
pub use state::AppState;
