//! Application state for the calculation API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// The calculators are pure functions, so the only shared resource is the
/// immutable service configuration.
#[derive(Clone, Default)]
pub struct AppState {
    /// The loaded service configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Name reported by the health endpoint.
    pub fn service_name(&self) -> &str {
        &self.config.service().name
    }
}
