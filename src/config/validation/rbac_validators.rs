//! RBAC configuration validators

use super::trait_def::Validate;
use crate::config::models::RbacConfig;
use tracing::debug;

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating RBAC configuration");

        if self.fallback_role.as_str().is_empty() {
            return Err("Fallback role cannot be empty".to_string());
        }

        if self.admin_role.as_str().is_empty() {
            return Err("Admin role cannot be empty".to_string());
        }

        if self.fallback_role == self.admin_role {
            return Err(format!(
                "Fallback role must not be the admin role '{}'",
                self.admin_role
            ));
        }

        if self.self_service_namespace.is_empty() || self.self_service_namespace.contains('/') {
            return Err(
                "Self-service namespace must be a single non-empty path segment".to_string(),
            );
        }

        if self.restricted_marker.is_empty() {
            return Err("Restricted marker cannot be empty".to_string());
        }

        if let Some(path) = &self.policy_file {
            if path.as_os_str().is_empty() {
                return Err("Policy file path cannot be empty".to_string());
            }
        }

        Ok(())
    }
}
