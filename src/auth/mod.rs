//! Authorization for the portal
//!
//! [`rbac::RbacSystem`] holds the policy engine. The free functions here
//! answer the same questions against the built-in tables, for callers that
//! only ever use the default policy.

pub mod rbac;

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use rbac::{AccessLevel, GateRequest, ModuleId, NavItem, RbacSystem, RoleInfo, RouteAccess};

static DEFAULT_RBAC: Lazy<RbacSystem> = Lazy::new(RbacSystem::builtin);

/// Engine over the built-in tables
pub fn default_rbac() -> &'static RbacSystem {
    &DEFAULT_RBAC
}

pub fn get_role_info(role: &str) -> &'static RoleInfo {
    DEFAULT_RBAC.get_role_info(role)
}

pub fn has_base_access(role: &str, module: &str) -> bool {
    DEFAULT_RBAC.has_base_access(role, module)
}

pub fn has_management_access(role: &str, module: &str) -> bool {
    DEFAULT_RBAC.has_management_access(role, module)
}

pub fn has_approval_access(role: &str, module: &str) -> bool {
    DEFAULT_RBAC.has_approval_access(role, module)
}

pub fn get_user_access_level(role: &str, module: &str) -> AccessLevel {
    DEFAULT_RBAC.get_user_access_level(role, module)
}

pub fn get_user_managed_modules(role: &str) -> Vec<ModuleId> {
    DEFAULT_RBAC.get_user_managed_modules(role)
}

pub fn get_user_accessible_modules(role: &str) -> Vec<ModuleId> {
    DEFAULT_RBAC.get_user_accessible_modules(role)
}

pub fn get_access_summary(role: &str) -> BTreeMap<ModuleId, AccessLevel> {
    DEFAULT_RBAC.get_access_summary(role)
}

pub fn get_route_access(role: &str, path: &str) -> RouteAccess {
    DEFAULT_RBAC.get_route_access(role, path)
}

pub fn check_gate(role: &str, request: &GateRequest) -> bool {
    DEFAULT_RBAC.check_gate(role, request)
}

pub fn get_navigation_items(role: &str) -> Vec<NavItem> {
    DEFAULT_RBAC.get_navigation_items(role)
}

pub fn has_capability(role: &str, capability: &str) -> bool {
    DEFAULT_RBAC.has_capability(role, capability)
}

pub fn get_default_route(role: &str) -> &'static str {
    DEFAULT_RBAC.get_default_route(role)
}
