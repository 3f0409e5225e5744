//! Helper methods for RBAC lookups

use super::system::RbacSystem;
use super::types::{ModuleAccess, RoleInfo};

impl RbacSystem {
    /// Matrix row for a module; `None` for unknown modules
    pub(super) fn module_access(&self, module: &str) -> Option<&ModuleAccess> {
        self.policy.modules.get(module)
    }

    /// Registry entry for a role without the fallback
    pub(super) fn registered_role(&self, role: &str) -> Option<&RoleInfo> {
        self.policy.roles.get(role)
    }

    /// Level used when ranking a route namespace; unregistered namespaces rank 0
    pub(super) fn namespace_level(&self, namespace: &str) -> u8 {
        self.registered_role(namespace).map_or(0, |info| info.level)
    }

    pub(super) fn is_admin_role(&self, role: &str) -> bool {
        self.config.admin_role == role
    }
}
