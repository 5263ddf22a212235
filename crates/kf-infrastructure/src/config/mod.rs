//! Configuration management
//!
//! Figment-based loading: defaults, then a TOML file, then `KF_` environment
//! variables.

pub mod loader;
pub mod logging;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use logging::LoggingConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
}
