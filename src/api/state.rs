//! Application state for the gradebook engine API.

use std::sync::Arc;

use crate::calculation::AggregationOptions;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration, which supplies the default grading and
/// unknown-status policies for requests that do not name their own.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the configured default aggregation options.
    pub fn default_options(&self) -> AggregationOptions {
        self.config.aggregation_options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::models::GradingPolicy;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_options_come_from_config() {
        let mut config = EngineConfig::default();
        config.grading.default_policy = GradingPolicy::Simple;
        let state = AppState::new(ConfigLoader::from_config(config));

        assert_eq!(state.default_options().grading, GradingPolicy::Simple);
    }
}
