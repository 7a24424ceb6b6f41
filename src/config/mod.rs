//! Configuration loading and management for the service.
//!
//! This module loads the HTTP service configuration (listener, logging, service
//! name) from a YAML file. Tax schedules are compiled constants of the
//! [`calculation`](crate::calculation) module and are not configurable.
//!
//! # Example
//!
//! ```no_run
//! use pension_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Service: {}", config.service().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LoggingConfig, ServerConfig, ServiceConfig, ServiceMetadata};
