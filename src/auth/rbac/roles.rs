//! Role registry methods

use super::system::RbacSystem;
use super::types::{RoleId, RoleInfo};
use tracing::debug;

impl RbacSystem {
    /// Registry entry for a role
    ///
    /// Unknown roles resolve to the fallback (lowest-privilege) entry, so the
    /// result can always be dereferenced. This runs on every decision, so the
    /// fallback is only logged at debug level.
    pub fn get_role_info(&self, role: &str) -> &RoleInfo {
        match self.registered_role(role) {
            Some(info) => info,
            None => {
                debug!(
                    "Unknown role '{}', using '{}'",
                    role, self.config.fallback_role
                );
                &self.fallback
            }
        }
    }

    /// Registry entry for a role, without falling back
    pub fn get_role(&self, role: &str) -> Option<&RoleInfo> {
        self.registered_role(role)
    }

    pub fn is_registered_role(&self, role: &str) -> bool {
        self.registered_role(role).is_some()
    }

    /// Registered roles, lowest level first
    pub fn list_roles(&self) -> Vec<(&RoleId, &RoleInfo)> {
        let mut roles: Vec<_> = self.policy.roles.iter().collect();
        roles.sort_by(|a, b| a.1.level.cmp(&b.1.level).then_with(|| a.0.cmp(b.0)));
        roles
    }

    pub fn get_role_level(&self, role: &str) -> u8 {
        self.get_role_info(role).level
    }

    /// Whether `role` strictly outranks `other`
    pub fn is_higher_role(&self, role: &str, other: &str) -> bool {
        self.get_role_level(role) > self.get_role_level(other)
    }

    pub fn is_admin(&self, role: &str) -> bool {
        self.is_admin_role(role)
    }

    /// Capability lookup; informational, never consulted by the decision functions
    pub fn has_capability(&self, role: &str, capability: &str) -> bool {
        self.get_role_info(role).capabilities.contains(capability)
    }

    /// Landing path used by route guards when access is denied
    pub fn get_default_route(&self, role: &str) -> &str {
        self.get_role_info(role)
            .landing_route
            .as_deref()
            .unwrap_or(&self.policy.default_route)
    }
}
