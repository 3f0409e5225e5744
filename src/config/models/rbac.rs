//! RBAC configuration

use super::default_true;
use crate::auth::rbac::RoleId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// How the component gate combines its module check with the role criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleCheckMode {
    /// The module check alone decides once a module is named
    #[default]
    Override,
    /// The module check is one more criterion, ORed with the rest
    Any,
}

impl std::str::FromStr for ModuleCheckMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "override" => Ok(ModuleCheckMode::Override),
            "any" | "or" => Ok(ModuleCheckMode::Any),
            _ => Err(format!("Invalid module check mode: {}", s)),
        }
    }
}

/// RBAC configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Role whose registry entry is returned for unknown role keys
    #[serde(default = "default_fallback_role")]
    pub fallback_role: RoleId,
    /// Role that bypasses route and gate checks
    #[serde(default = "default_admin_role")]
    pub admin_role: RoleId,
    /// Route namespace every role may reach with basic access
    #[serde(default = "default_self_service_namespace")]
    pub self_service_namespace: String,
    /// Allow-list entry that switches off the admin override in the gate
    #[serde(default = "default_restricted_marker")]
    pub restricted_marker: String,
    /// Component gate module-check combination
    #[serde(default)]
    pub module_check_mode: ModuleCheckMode,
    /// YAML policy replacing the built-in tables
    #[serde(default)]
    pub policy_file: Option<PathBuf>,
    /// Treat every policy finding as an error
    #[serde(default = "default_true")]
    pub strict: bool,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            fallback_role: default_fallback_role(),
            admin_role: default_admin_role(),
            self_service_namespace: default_self_service_namespace(),
            restricted_marker: default_restricted_marker(),
            module_check_mode: ModuleCheckMode::default(),
            policy_file: None,
            strict: true,
        }
    }
}

impl RbacConfig {
    /// Apply explicitly set overrides; unset keys keep their current value
    pub fn merge(mut self, other: RbacOverrides) -> Self {
        if let Some(role) = other.fallback_role {
            self.fallback_role = role;
        }
        if let Some(role) = other.admin_role {
            self.admin_role = role;
        }
        if let Some(namespace) = other.self_service_namespace {
            self.self_service_namespace = namespace;
        }
        if let Some(marker) = other.restricted_marker {
            self.restricted_marker = marker;
        }
        if let Some(mode) = other.module_check_mode {
            self.module_check_mode = mode;
        }
        if let Some(path) = other.policy_file {
            self.policy_file = Some(path);
        }
        if let Some(strict) = other.strict {
            self.strict = strict;
        }
        self
    }
}

/// RBAC settings layered over a base configuration
///
/// `None` means "not set here", so a value equal to the default still
/// overrides whatever the base configuration holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RbacOverrides {
    pub fallback_role: Option<RoleId>,
    pub admin_role: Option<RoleId>,
    pub self_service_namespace: Option<String>,
    pub restricted_marker: Option<String>,
    pub module_check_mode: Option<ModuleCheckMode>,
    pub policy_file: Option<PathBuf>,
    pub strict: Option<bool>,
}

fn default_fallback_role() -> RoleId {
    RoleId::EMPLOYEE
}

fn default_admin_role() -> RoleId {
    RoleId::ADMIN
}

fn default_self_service_namespace() -> String {
    "employee".to_string()
}

fn default_restricted_marker() -> String {
    "admin-restricted".to_string()
}

/// Warn about configurations that weaken load-time checks
pub fn warn_lenient_config(config: &RbacConfig) {
    if !config.strict {
        warn!(
            "RBAC strict mode is disabled; management roles missing from a module's base access will only be logged"
        );
    }
    if config.module_check_mode == ModuleCheckMode::Any {
        warn!("Component gate module checks are ORed with role criteria instead of overriding them");
    }
}
