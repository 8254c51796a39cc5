//! Configuration loading and management for the gradebook engine.
//!
//! # Example
//!
//! ```no_run
//! use gradebook_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Session TTL: {} minutes", config.session_ttl().num_minutes());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{
    AttendanceConfig, DEFAULT_BIND_ADDRESS, DEFAULT_SESSION_TTL_MINUTES, EngineConfig,
    GradingConfig, ServerConfig, SessionConfig,
};
