//! Module access decisions

use std::collections::BTreeMap;
use tracing::trace;

use super::system::RbacSystem;
use super::types::{AccessLevel, AccessType, ModuleId};

impl RbacSystem {
    /// Whether `role` may use the module's employee-facing features
    pub fn has_base_access(&self, role: &str, module: &str) -> bool {
        self.module_access(module)
            .is_some_and(|access| access.base_access.contains(role))
    }

    /// Whether `role` may administer the module
    pub fn has_management_access(&self, role: &str, module: &str) -> bool {
        self.module_access(module)
            .is_some_and(|access| access.management_access.contains(role))
    }

    /// Whether `role` may approve or deny items in the module
    pub fn has_approval_access(&self, role: &str, module: &str) -> bool {
        self.module_access(module)
            .is_some_and(|access| access.approval_access.contains(role))
    }

    /// Single-tier check
    pub fn has_access(&self, role: &str, module: &str, access_type: AccessType) -> bool {
        match access_type {
            AccessType::Basic => self.has_base_access(role, module),
            AccessType::Approval => self.has_approval_access(role, module),
            AccessType::Management => self.has_management_access(role, module),
        }
    }

    /// Best access level, checked management, then approval, then basic
    pub fn get_user_access_level(&self, role: &str, module: &str) -> AccessLevel {
        let level = if self.has_management_access(role, module) {
            AccessLevel::Management
        } else if self.has_approval_access(role, module) {
            AccessLevel::Approval
        } else if self.has_base_access(role, module) {
            AccessLevel::Basic
        } else {
            AccessLevel::None
        };

        trace!(role, module, level = level.as_str(), "resolved module access");
        level
    }

    /// Modules the role manages, sorted by key
    pub fn get_user_managed_modules(&self, role: &str) -> Vec<ModuleId> {
        self.policy
            .modules
            .iter()
            .filter(|(_, access)| access.management_access.contains(role))
            .map(|(module, _)| module.clone())
            .collect()
    }

    /// Modules the role may use, sorted by key
    pub fn get_user_accessible_modules(&self, role: &str) -> Vec<ModuleId> {
        self.policy
            .modules
            .iter()
            .filter(|(_, access)| access.base_access.contains(role))
            .map(|(module, _)| module.clone())
            .collect()
    }

    /// Best access level on every registered module
    pub fn get_access_summary(&self, role: &str) -> BTreeMap<ModuleId, AccessLevel> {
        self.policy
            .modules
            .keys()
            .map(|module| (module.clone(), self.get_user_access_level(role, module.as_str())))
            .collect()
    }
}
