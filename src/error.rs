//! Error types for the pension and payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a calculation or while
//! loading the service configuration.

use thiserror::Error;

/// The main error type for the engine.
///
/// Both calculators return this error type. Invalid input is always reported
/// as [`EngineError::InvalidParameters`]; a calculation never yields a
/// partial result.
///
/// # Example
///
/// ```
/// use pension_engine::error::EngineError;
///
/// let error = EngineError::InvalidParameters {
///     field: "workHours".to_string(),
///     message: "must be greater than 0".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid parameter 'workHours': must be greater than 0");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// One or more input fields violated a validation rule.
    #[error("Invalid parameter '{field}': {message}")]
    InvalidParameters {
        /// The offending field name(s), comma separated when several are involved.
        field: String,
        /// A description of the violated rule.
        message: String,
    },

    /// The arithmetic produced a value that cannot be reported.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidParameters`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidParameters {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
