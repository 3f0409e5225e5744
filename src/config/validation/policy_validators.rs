//! Load-time policy validators
//!
//! The decision functions trust the tables they are given, so every
//! structural contract is checked once here, before an engine is built.

use super::trait_def::Validate;
use crate::auth::rbac::{AccessPolicy, Visibility};
use crate::config::models::RbacConfig;
use std::collections::HashSet;
use tracing::debug;

/// Findings from a policy check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl PolicyReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Collapse into the `Validate` result shape
    pub fn into_result(self) -> Result<Vec<String>, String> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(self.errors.join("; "))
        }
    }
}

/// Check a policy against the engine configuration
///
/// `management_access ⊆ base_access` violations are errors in strict mode
/// and warnings otherwise; every other finding is an error.
pub fn validate_policy(policy: &AccessPolicy, config: &RbacConfig) -> PolicyReport {
    debug!("Validating access policy");
    let mut report = PolicyReport::default();
    let errors = &mut report.errors;

    for (id, info) in &policy.roles {
        if id.as_str().is_empty() {
            errors.push("Role id cannot be empty".to_string());
        }
        if info.level == 0 {
            errors.push(format!("Role '{}' must have a level of at least 1", id));
        }
        if info.name.is_empty() {
            errors.push(format!("Role '{}' must have a display name", id));
        }
        for module in &info.management_domains {
            if !policy.modules.contains_key(module) {
                errors.push(format!(
                    "Role '{}' lists unknown management domain '{}'",
                    id, module
                ));
            }
        }
    }

    match policy.roles.get(&config.admin_role) {
        None => errors.push(format!(
            "Admin role '{}' is not registered",
            config.admin_role
        )),
        Some(admin) => {
            for (id, info) in &policy.roles {
                if *id != config.admin_role && info.level >= admin.level {
                    errors.push(format!(
                        "Role '{}' (level {}) must rank below admin role '{}' (level {})",
                        id, info.level, config.admin_role, admin.level
                    ));
                }
            }
        }
    }

    if !policy.roles.contains_key(&config.fallback_role) {
        errors.push(format!(
            "Fallback role '{}' is not registered",
            config.fallback_role
        ));
    }

    for (module, access) in &policy.modules {
        let tiers = [
            ("base", &access.base_access),
            ("management", &access.management_access),
            ("approval", &access.approval_access),
        ];
        for (tier, roles) in tiers {
            for role in roles {
                if !policy.roles.contains_key(role) {
                    errors.push(format!(
                        "Module '{}' {} access references unknown role '{}'",
                        module, tier, role
                    ));
                }
            }
        }

        for role in access.management_access.difference(&access.base_access) {
            let finding = format!(
                "Module '{}' grants management to '{}' without base access",
                module, role
            );
            if config.strict {
                errors.push(finding);
            } else {
                report.warnings.push(finding);
            }
        }
    }

    let mut section_ids = HashSet::new();
    for section in &policy.navigation {
        if !section_ids.insert(section.id.as_str()) {
            errors.push(format!("Duplicate navigation section '{}'", section.id));
        }
        if section.path.is_some() && !section.children.is_empty() {
            errors.push(format!(
                "Navigation section '{}' cannot have both a path and children",
                section.id
            ));
        }
        match &section.visible_to {
            Visibility::Everyone => {}
            Visibility::Roles { roles } => {
                for role in roles {
                    if !policy.roles.contains_key(role) {
                        errors.push(format!(
                            "Navigation section '{}' references unknown role '{}'",
                            section.id, role
                        ));
                    }
                }
            }
            Visibility::ManagesAny => {
                if section.children.iter().all(|c| c.module.is_none()) {
                    errors.push(format!(
                        "Navigation section '{}' is management-gated but names no modules",
                        section.id
                    ));
                }
            }
        }
        for child in &section.children {
            if let Some(module) = &child.module {
                if !policy.modules.contains_key(module) {
                    errors.push(format!(
                        "Navigation entry '{}' references unknown module '{}'",
                        child.id, module
                    ));
                }
            }
        }
    }

    if !policy.default_route.starts_with('/') {
        errors.push(format!(
            "Default route '{}' must be an absolute path",
            policy.default_route
        ));
    }

    report
}

impl Validate for AccessPolicy {
    fn validate(&self) -> Result<(), String> {
        validate_policy(self, &RbacConfig::default())
            .into_result()
            .map(|_| ())
    }
}
