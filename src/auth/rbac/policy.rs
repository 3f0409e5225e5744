//! Policy tables: role registry, module access matrix and navigation layout

use crate::utils::error::{RbacError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::debug;

use super::navigation::{NavChild, NavSection, Visibility};
use super::types::{ModuleAccess, ModuleId, RoleId, RoleInfo};

/// Static access policy loaded once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessPolicy {
    /// Role registry
    pub roles: BTreeMap<RoleId, RoleInfo>,
    /// Module access matrix
    pub modules: BTreeMap<ModuleId, ModuleAccess>,
    /// Navigation layout, in display order
    #[serde(default)]
    pub navigation: Vec<NavSection>,
    /// Landing path for roles without their own
    #[serde(default = "default_landing_route")]
    pub default_route: String,
}

fn default_landing_route() -> String {
    "/dashboard".to_string()
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            roles: default_roles(),
            modules: default_modules(),
            navigation: default_navigation(),
            default_route: default_landing_route(),
        }
    }
}

impl AccessPolicy {
    /// Load a policy from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading access policy from: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|e| {
            RbacError::config(format!("Failed to read policy file {:?}: {}", path, e))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a policy from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let policy: AccessPolicy = serde_yaml::from_str(content)?;
        debug!(
            "Parsed policy with {} roles and {} modules",
            policy.roles.len(),
            policy.modules.len()
        );
        Ok(policy)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add or replace a role entry
    pub fn with_role(mut self, id: impl Into<RoleId>, info: RoleInfo) -> Self {
        self.roles.insert(id.into(), info);
        self
    }

    /// Add or replace a module entry
    pub fn with_module(mut self, id: impl Into<ModuleId>, access: ModuleAccess) -> Self {
        self.modules.insert(id.into(), access);
        self
    }
}

fn strings(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn role_set(roles: &[RoleId]) -> BTreeSet<RoleId> {
    roles.iter().cloned().collect()
}

fn role_info(
    level: u8,
    name: &str,
    description: &str,
    capabilities: &[&str],
    management_domains: &[ModuleId],
) -> RoleInfo {
    RoleInfo {
        level,
        name: name.to_string(),
        description: description.to_string(),
        capabilities: strings(capabilities),
        management_domains: management_domains.iter().cloned().collect(),
        landing_route: None,
    }
}

fn default_roles() -> BTreeMap<RoleId, RoleInfo> {
    debug!("Initializing default roles");

    let mut roles = BTreeMap::new();
    roles.insert(
        RoleId::EMPLOYEE,
        role_info(
            1,
            "Employee",
            "Submits and tracks their own requests",
            &["submit_requests", "view_own_requests"],
            &[],
        ),
    );
    roles.insert(
        RoleId::SUPERVISOR,
        role_info(
            2,
            "Supervisor",
            "Reviews requests raised by their team",
            &[
                "submit_requests",
                "view_own_requests",
                "view_team_requests",
                "approve_team_requests",
            ],
            &[],
        ),
    );
    roles.insert(
        RoleId::FINANCE,
        role_info(
            3,
            "Finance Officer",
            "Manages petty cash disbursements and invoices",
            &[
                "submit_requests",
                "view_own_requests",
                "manage_petty_cash",
                "manage_invoices",
                "approve_payments",
                "view_financial_reports",
            ],
            &[ModuleId::PETTY_CASH, ModuleId::INVOICES],
        ),
    );
    roles.insert(
        RoleId::HR,
        role_info(
            3,
            "HR Officer",
            "Handles incident reports, sick leave and suggestions",
            &[
                "submit_requests",
                "view_own_requests",
                "manage_incident_reports",
                "manage_sick_leave",
                "manage_suggestions",
                "view_employee_records",
            ],
            &[
                ModuleId::INCIDENT_REPORTS,
                ModuleId::SICK_LEAVE,
                ModuleId::SUGGESTIONS,
            ],
        ),
    );
    roles.insert(
        RoleId::IT,
        role_info(
            3,
            "IT Support",
            "Resolves IT support tickets",
            &[
                "submit_requests",
                "view_own_requests",
                "manage_it_support",
                "manage_assets",
            ],
            &[ModuleId::IT_SUPPORT],
        ),
    );
    roles.insert(
        RoleId::ADMIN,
        role_info(
            4,
            "Administrator",
            "Full system access",
            &["all", "manage_users", "manage_roles", "system_settings"],
            &ModuleId::BUILTIN,
        ),
    );

    debug!("Initialized {} default roles", roles.len());
    roles
}

fn default_modules() -> BTreeMap<ModuleId, ModuleAccess> {
    debug!("Initializing default module access matrix");

    let everyone = role_set(&RoleId::BUILTIN);
    let module = |management: &[RoleId], approval: &[RoleId]| ModuleAccess {
        base_access: everyone.clone(),
        management_access: role_set(management),
        approval_access: role_set(approval),
    };

    let mut modules = BTreeMap::new();
    modules.insert(
        ModuleId::PETTY_CASH,
        module(
            &[RoleId::FINANCE, RoleId::ADMIN],
            &[RoleId::SUPERVISOR, RoleId::FINANCE, RoleId::ADMIN],
        ),
    );
    modules.insert(
        ModuleId::INVOICES,
        module(
            &[RoleId::FINANCE, RoleId::ADMIN],
            &[RoleId::FINANCE, RoleId::ADMIN],
        ),
    );
    modules.insert(
        ModuleId::INCIDENT_REPORTS,
        module(
            &[RoleId::HR, RoleId::ADMIN],
            &[RoleId::SUPERVISOR, RoleId::HR, RoleId::ADMIN],
        ),
    );
    modules.insert(
        ModuleId::IT_SUPPORT,
        module(&[RoleId::IT, RoleId::ADMIN], &[RoleId::IT, RoleId::ADMIN]),
    );
    modules.insert(
        ModuleId::SUGGESTIONS,
        module(&[RoleId::HR, RoleId::ADMIN], &[RoleId::HR, RoleId::ADMIN]),
    );
    modules.insert(
        ModuleId::SICK_LEAVE,
        module(
            &[RoleId::HR, RoleId::ADMIN],
            &[RoleId::SUPERVISOR, RoleId::HR, RoleId::ADMIN],
        ),
    );

    debug!("Initialized {} default modules", modules.len());
    modules
}

fn link(id: &str, label: &str, path: &str, icon: &str, module: Option<ModuleId>) -> NavChild {
    NavChild {
        id: id.to_string(),
        label: label.to_string(),
        path: path.to_string(),
        icon: icon.to_string(),
        module,
    }
}

fn section(id: &str, label: &str, icon: &str, visible_to: Visibility) -> NavSection {
    NavSection {
        id: id.to_string(),
        label: label.to_string(),
        icon: icon.to_string(),
        path: None,
        visible_to,
        children: Vec::new(),
    }
}

fn default_navigation() -> Vec<NavSection> {
    let dashboard = NavSection {
        path: Some("/dashboard".to_string()),
        ..section("dashboard", "Dashboard", "dashboard", Visibility::Everyone)
    };

    let employee = NavSection {
        children: vec![
            link(
                "cash-requests",
                "Petty Cash Requests",
                "/employee/cash-requests",
                "wallet",
                Some(ModuleId::PETTY_CASH),
            ),
            link(
                "invoices",
                "Invoices",
                "/employee/invoices",
                "receipt",
                Some(ModuleId::INVOICES),
            ),
            link(
                "incident-reports",
                "Incident Reports",
                "/employee/incident-reports",
                "alert-triangle",
                Some(ModuleId::INCIDENT_REPORTS),
            ),
            link(
                "it-support",
                "IT Support",
                "/employee/it-support",
                "monitor",
                Some(ModuleId::IT_SUPPORT),
            ),
            link(
                "suggestions",
                "Suggestions",
                "/employee/suggestions",
                "message-circle",
                Some(ModuleId::SUGGESTIONS),
            ),
            link(
                "sick-leave",
                "Sick Leave",
                "/employee/sick-leave",
                "heart",
                Some(ModuleId::SICK_LEAVE),
            ),
        ],
        ..section(
            "employee-services",
            "Employee Services",
            "user",
            Visibility::Everyone,
        )
    };

    let team = NavSection {
        children: vec![
            link(
                "team-requests",
                "Team Requests",
                "/supervisor/team-requests",
                "users",
                None,
            ),
            link(
                "team-approvals",
                "Pending Approvals",
                "/supervisor/approvals",
                "check-square",
                None,
            ),
        ],
        ..section(
            "team-management",
            "Team Management",
            "users",
            Visibility::Roles {
                roles: vec![RoleId::SUPERVISOR, RoleId::ADMIN],
            },
        )
    };

    let finance = NavSection {
        children: vec![
            link(
                "cash-approvals",
                "Cash Approvals",
                "/finance/cash-approvals",
                "dollar-sign",
                Some(ModuleId::PETTY_CASH),
            ),
            link(
                "invoice-management",
                "Invoice Management",
                "/finance/invoices",
                "file-text",
                Some(ModuleId::INVOICES),
            ),
        ],
        ..section("finance", "Finance", "dollar-sign", Visibility::ManagesAny)
    };

    let hr = NavSection {
        children: vec![
            link(
                "incident-management",
                "Incident Management",
                "/hr/incident-reports",
                "alert-triangle",
                Some(ModuleId::INCIDENT_REPORTS),
            ),
            link(
                "sick-leave-management",
                "Sick Leave Management",
                "/hr/sick-leave",
                "heart",
                Some(ModuleId::SICK_LEAVE),
            ),
            link(
                "suggestion-box",
                "Suggestion Box",
                "/hr/suggestions",
                "message-circle",
                Some(ModuleId::SUGGESTIONS),
            ),
        ],
        ..section("hr", "HR", "briefcase", Visibility::ManagesAny)
    };

    let it = NavSection {
        children: vec![link(
            "support-requests",
            "Support Requests",
            "/it/support-requests",
            "tool",
            Some(ModuleId::IT_SUPPORT),
        )],
        ..section("it", "IT", "monitor", Visibility::ManagesAny)
    };

    let admin = NavSection {
        children: vec![
            link("users", "User Management", "/admin/users", "user-cog", None),
            link(
                "role-access",
                "Role Access",
                "/admin/role-access",
                "shield",
                None,
            ),
            link(
                "system-settings",
                "System Settings",
                "/admin/settings",
                "settings",
                None,
            ),
        ],
        ..section(
            "system-administration",
            "System Administration",
            "settings",
            Visibility::Roles {
                roles: vec![RoleId::ADMIN],
            },
        )
    };

    vec![dashboard, employee, team, finance, hr, it, admin]
}
