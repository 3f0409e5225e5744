//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::collections::BTreeSet;
use std::fmt;

/// Role identifier
///
/// Built-in roles are associated constants so a misspelt id is a compile
/// error; roles loaded from a policy file use the same type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(Cow<'static, str>);

impl RoleId {
    pub const EMPLOYEE: RoleId = RoleId(Cow::Borrowed("employee"));
    pub const SUPERVISOR: RoleId = RoleId(Cow::Borrowed("supervisor"));
    pub const FINANCE: RoleId = RoleId(Cow::Borrowed("finance"));
    pub const HR: RoleId = RoleId(Cow::Borrowed("hr"));
    pub const IT: RoleId = RoleId(Cow::Borrowed("it"));
    pub const ADMIN: RoleId = RoleId(Cow::Borrowed("admin"));

    /// Every built-in role, lowest level first
    pub const BUILTIN: [RoleId; 6] = [
        Self::EMPLOYEE,
        Self::SUPERVISOR,
        Self::FINANCE,
        Self::HR,
        Self::IT,
        Self::ADMIN,
    ];

    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Module identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(Cow<'static, str>);

impl ModuleId {
    pub const PETTY_CASH: ModuleId = ModuleId(Cow::Borrowed("pettycash"));
    pub const INVOICES: ModuleId = ModuleId(Cow::Borrowed("invoices"));
    pub const INCIDENT_REPORTS: ModuleId = ModuleId(Cow::Borrowed("incident-reports"));
    pub const IT_SUPPORT: ModuleId = ModuleId(Cow::Borrowed("it-support"));
    pub const SUGGESTIONS: ModuleId = ModuleId(Cow::Borrowed("suggestions"));
    pub const SICK_LEAVE: ModuleId = ModuleId(Cow::Borrowed("sick-leave"));

    pub const BUILTIN: [ModuleId; 6] = [
        Self::PETTY_CASH,
        Self::INVOICES,
        Self::INCIDENT_REPORTS,
        Self::IT_SUPPORT,
        Self::SUGGESTIONS,
        Self::SICK_LEAVE,
    ];

    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_id_conversions {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $ty {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $ty {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

impl_id_conversions!(RoleId);
impl_id_conversions!(ModuleId);

/// Role registry entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleInfo {
    /// Authority level, strictly increasing with privilege
    pub level: u8,
    /// Display name
    pub name: String,
    /// Role description
    #[serde(default)]
    pub description: String,
    /// Opaque permission tokens read by UI surfaces
    #[serde(default)]
    pub capabilities: BTreeSet<String>,
    /// Modules this role administers (informational)
    #[serde(default)]
    pub management_domains: BTreeSet<ModuleId>,
    /// Landing path overriding the policy-wide default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landing_route: Option<String>,
}

/// Role sets guarding one module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleAccess {
    /// Roles that may use the employee-facing features
    #[serde(default)]
    pub base_access: BTreeSet<RoleId>,
    /// Roles that may administer the module
    #[serde(default)]
    pub management_access: BTreeSet<RoleId>,
    /// Roles that may approve or deny items in the module
    #[serde(default)]
    pub approval_access: BTreeSet<RoleId>,
}

/// Access tier requested from a module check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    #[default]
    Basic,
    Approval,
    Management,
}

/// Best access a role holds on a module
///
/// Variants are ordered so that `None < Basic < Approval < Management`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    None,
    Basic,
    Approval,
    Management,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::None => "none",
            AccessLevel::Basic => "basic",
            AccessLevel::Approval => "approval",
            AccessLevel::Management => "management",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access level granted on a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteAccessLevel {
    None,
    Basic,
    Management,
    Elevated,
    Full,
}

/// Route access decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAccess {
    pub has_access: bool,
    pub access_level: RouteAccessLevel,
}

impl RouteAccess {
    pub const DENIED: RouteAccess = RouteAccess {
        has_access: false,
        access_level: RouteAccessLevel::None,
    };

    pub(super) fn granted(access_level: RouteAccessLevel) -> Self {
        Self {
            has_access: true,
            access_level,
        }
    }
}

/// Segments of a route path as read by the route resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTarget<'a> {
    /// Owner namespace (first segment after the leading slash)
    pub namespace: Option<&'a str>,
    /// Module name candidate (second segment)
    pub module: Option<&'a str>,
}
