//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{LoggingConfig, ServerConfig, ServiceConfig, ServiceMetadata};

/// Loads and provides access to the service configuration.
///
/// Tax brackets, ceilings and rates are compiled into the calculators and are
/// not part of this configuration.
///
/// # File format
///
/// ```yaml
/// service:
///   name: pension-engine
/// server:
///   host: 0.0.0.0
///   port: 3001
/// logging:
///   filter: info
/// ```
///
/// # Example
///
/// ```no_run
/// use pension_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml").unwrap();
/// println!("Listening on {}", loader.server().bind_address());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file contains invalid YAML or mistyped fields (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pension_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/service.yaml")?;
    /// # Ok::<(), pension_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Example
    ///
    /// ```
    /// use pension_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str("server:\n  port: 8080\n").unwrap();
    /// assert_eq!(loader.server().port, 8080);
    /// assert_eq!(loader.server().host, "0.0.0.0");
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> EngineResult<Self> {
        // An empty document deserializes to unit, not to a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ServiceConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the service metadata.
    pub fn service(&self) -> &ServiceMetadata {
        &self.config.service
    }

    /// Returns the HTTP listener settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the logging settings.
    pub fn logging(&self) -> &LoggingConfig {
        &self.config.logging
    }

    /// Overrides the listener host and/or port, e.g. from command line flags.
    pub fn with_server_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.config.server.host = host;
        }
        if let Some(port) = port {
            self.config.server.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_test_config() -> ConfigLoader {
        ConfigLoader::load("./config/service.yaml").expect("Failed to load config")
    }

    #[test]
    fn test_load_service_config() {
        let loader = load_test_config();
        assert_eq!(loader.service().name, "pension-engine");
        assert_eq!(loader.server().host, "0.0.0.0");
        assert_eq!(loader.server().port, 3001);
        assert_eq!(loader.logging().filter, "info,pension_engine=debug");
    }

    #[test]
    fn test_missing_config_file() {
        let result = ConfigLoader::load("/nonexistent/path/service.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let result = ConfigLoader::from_yaml_str("server: [unclosed");
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "<inline>"),
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_mistyped_port_is_parse_error() {
        let result = ConfigLoader::from_yaml_str("server:\n  port: not-a-port\n");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let loader = ConfigLoader::from_yaml_str("logging:\n  filter: warn\n").unwrap();
        assert_eq!(loader.logging().filter, "warn");
        assert_eq!(loader.server(), &ServerConfig::default());
        assert_eq!(loader.service(), &ServiceMetadata::default());
    }

    #[test]
    fn test_empty_document_is_default() {
        let loader = ConfigLoader::from_yaml_str("").unwrap();
        assert_eq!(loader.config(), &ServiceConfig::default());
    }

    #[test]
    fn test_server_overrides() {
        let loader = ConfigLoader::default()
            .with_server_overrides(Some("127.0.0.1".to_string()), Some(9000));
        assert_eq!(loader.server().bind_address(), "127.0.0.1:9000");

        let loader = loader.with_server_overrides(None, None);
        assert_eq!(loader.server().bind_address(), "127.0.0.1:9000");
    }
}
