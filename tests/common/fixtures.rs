//! Test fixtures and policy factories
//!
//! All factories build real policies and engines, not mocks.

use portal_rbac::auth::rbac::{AccessPolicy, ModuleAccess, RbacSystem, RoleId, RoleInfo};
use portal_rbac::config::RbacConfig;
use std::collections::BTreeSet;
use std::io::Write;
use tempfile::NamedTempFile;

/// Factory for test policies
pub struct PolicyFactory;

impl PolicyFactory {
    /// Engine over the built-in tables
    pub fn default_engine() -> RbacSystem {
        RbacSystem::new(&RbacConfig::default()).unwrap()
    }

    /// Built-in tables plus a level-4 `auditor` role; admin moves to level 5
    pub fn with_auditor() -> AccessPolicy {
        let mut policy = AccessPolicy::default().with_role("auditor", Self::role(4, "Auditor"));
        policy.roles.get_mut("admin").unwrap().level = 5;
        policy
    }

    /// Built-in tables plus a `fixed-assets` module managed by finance
    pub fn with_fixed_assets() -> AccessPolicy {
        let set = |roles: &[RoleId]| roles.iter().cloned().collect::<BTreeSet<_>>();
        AccessPolicy::default().with_module(
            "fixed-assets",
            ModuleAccess {
                base_access: set(&[RoleId::SUPERVISOR, RoleId::FINANCE, RoleId::ADMIN]),
                management_access: set(&[RoleId::FINANCE, RoleId::ADMIN]),
                approval_access: set(&[RoleId::ADMIN]),
            },
        )
    }

    pub fn engine(policy: AccessPolicy) -> RbacSystem {
        RbacSystem::with_policy(RbacConfig::default(), policy).unwrap()
    }

    pub fn role(level: u8, name: &str) -> RoleInfo {
        RoleInfo {
            level,
            name: name.to_string(),
            description: format!("{} test role", name),
            capabilities: BTreeSet::new(),
            management_domains: BTreeSet::new(),
            landing_route: None,
        }
    }

    /// Write YAML to a temporary file kept alive by the returned handle
    pub fn write_yaml(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }
}

/// A small standalone policy in file form
pub const MINIMAL_POLICY_YAML: &str = r#"
roles:
  clerk:
    level: 1
    name: Clerk
    capabilities: [submit_requests]
  controller:
    level: 2
    name: Controller
    management_domains: [expenses]
  admin:
    level: 3
    name: Administrator
  employee:
    level: 1
    name: Employee
modules:
  expenses:
    base_access: [clerk, controller, admin, employee]
    management_access: [controller, admin]
    approval_access: [controller, admin]
navigation:
  - id: dashboard
    label: Dashboard
    path: /home
  - id: expenses
    label: Expenses
    visible_to:
      rule: manages_any
    children:
      - id: expense-review
        label: Expense Review
        path: /controller/expenses
        module: expenses
  - id: admin
    label: Admin
    visible_to:
      rule: roles
      roles: [admin]
    children:
      - id: users
        label: Users
        path: /admin/users
default_route: /home
"#;
