//! Configuration data models

pub mod logging;
pub mod rbac;

// Re-export all configuration types
pub use logging::*;
pub use rbac::*;

/// Default values for configuration
pub fn default_true() -> bool {
    true
}
