//! Configuration types for the gradebook engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `engine.yaml`. Every section is optional and falls
//! back to its default.

use chrono::Duration;
use serde::Deserialize;

use crate::calculation::AggregationOptions;
use crate::models::{GradingPolicy, UnknownStatusPolicy};

/// Default session lifetime in minutes.
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

/// Default server bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

/// Grading section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GradingConfig {
    /// Policy used when a caller does not pick one.
    #[serde(default)]
    pub default_policy: GradingPolicy,
}

/// Attendance section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AttendanceConfig {
    /// Handling of unrecognized attendance statuses.
    #[serde(default)]
    pub unknown_status: UnknownStatusPolicy,
}

/// Session section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Session lifetime in minutes.
    #[serde(default = "default_ttl_minutes")]
    pub ttl_minutes: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
        }
    }
}

fn default_ttl_minutes() -> i64 {
    DEFAULT_SESSION_TTL_MINUTES
}

/// Server section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Grading settings.
    #[serde(default)]
    pub grading: GradingConfig,
    /// Attendance settings.
    #[serde(default)]
    pub attendance: AttendanceConfig,
    /// Session settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

impl EngineConfig {
    /// Returns the aggregation options implied by this configuration.
    pub fn aggregation_options(&self) -> AggregationOptions {
        AggregationOptions {
            grading: self.grading.default_policy,
            unknown_status: self.attendance.unknown_status,
        }
    }

    /// Returns the session lifetime, or `None` if `ttl_minutes` does not
    /// fit in a `Duration`.
    pub fn try_session_ttl(&self) -> Option<Duration> {
        Duration::try_minutes(self.session.ttl_minutes)
    }

    /// Returns the session lifetime. Out-of-range values clamp to the
    /// longest representable lifetime.
    pub fn session_ttl(&self) -> Duration {
        self.try_session_ttl().unwrap_or(Duration::MAX)
    }
}
