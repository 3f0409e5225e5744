//! Helper functions for creating specific error types

use super::types::RbacError;

impl RbacError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Whether the error came from policy validation rather than I/O or parsing
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
