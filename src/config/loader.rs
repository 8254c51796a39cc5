//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use chrono::Duration;
use tracing::debug;

use crate::calculation::AggregationOptions;
use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Name of the configuration file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "engine.yaml";

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── engine.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use gradebook_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Default policy: {:?}", loader.config().grading.default_policy);
/// # Ok::<(), gradebook_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads `engine.yaml` from the specified directory.
    ///
    /// Returns `ConfigNotFound` if the file is missing and
    /// `ConfigParseError` if it is not valid YAML or fails validation.
    pub fn load<P: AsRef<Path>>(dir: P) -> EngineResult<Self> {
        Self::load_file(dir.as_ref().join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from an explicit file path.
    pub fn load_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, "Loaded engine configuration");
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    fn parse(content: &str, path: &str) -> EngineResult<EngineConfig> {
        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        if config.session.ttl_minutes <= 0 {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: format!(
                    "session.ttl_minutes must be positive, got {}",
                    config.session.ttl_minutes
                ),
            });
        }
        if config.try_session_ttl().is_none() {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: format!(
                    "session.ttl_minutes is out of range, got {}",
                    config.session.ttl_minutes
                ),
            });
        }

        Ok(config)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the default aggregation options.
    pub fn aggregation_options(&self) -> AggregationOptions {
        self.config.aggregation_options()
    }

    /// Returns the session lifetime.
    pub fn session_ttl(&self) -> Duration {
        self.config.session_ttl()
    }
}
