//! Logging configuration

use crate::utils::logging::LogLevel;
use serde::{Deserialize, Serialize};

/// Logging configuration for the command-line tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level emitted
    #[serde(default)]
    pub level: LogLevel,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Apply explicitly set overrides; unset keys keep their current value
    pub fn merge(mut self, other: LoggingOverrides) -> Self {
        if let Some(level) = other.level {
            self.level = level;
        }
        if let Some(json) = other.json {
            self.json = json;
        }
        self
    }
}

/// Logging settings layered over a base configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggingOverrides {
    pub level: Option<LogLevel>,
    pub json: Option<bool>,
}
