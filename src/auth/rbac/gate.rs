//! Component-level access gate
//!
//! Decides whether a protected piece of UI is shown to a role. The criteria
//! are ORed; a named module either overrides them or joins them, depending on
//! [`ModuleCheckMode`].

use crate::config::ModuleCheckMode;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::system::RbacSystem;
use super::types::{AccessType, ModuleId, RoleId};

/// Criteria guarding one component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateRequest {
    /// Exact role match
    #[serde(default)]
    pub role: Option<RoleId>,
    /// Allow-list; may carry the admin-restricted marker
    #[serde(default)]
    pub roles: Vec<String>,
    /// Minimum hierarchy level
    #[serde(default)]
    pub min_level: Option<u8>,
    /// Module-scoped check
    #[serde(default)]
    pub module: Option<ModuleId>,
    /// Tier used for the module check
    #[serde(default)]
    pub access_type: AccessType,
}

impl GateRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(mut self, role: impl Into<RoleId>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn min_level(mut self, level: u8) -> Self {
        self.min_level = Some(level);
        self
    }

    pub fn module(mut self, module: impl Into<ModuleId>, access_type: AccessType) -> Self {
        self.module = Some(module.into());
        self.access_type = access_type;
        self
    }
}

impl RbacSystem {
    /// Evaluate the gate using the configured module-check mode
    pub fn check_gate(&self, user_role: &str, request: &GateRequest) -> bool {
        self.check_gate_with_mode(user_role, request, self.config.module_check_mode)
    }

    /// Evaluate the gate with an explicit module-check mode
    pub fn check_gate_with_mode(
        &self,
        user_role: &str,
        request: &GateRequest,
        mode: ModuleCheckMode,
    ) -> bool {
        let restricted = request
            .roles
            .iter()
            .any(|r| *r == self.config.restricted_marker);
        if self.is_admin_role(user_role) && !restricted {
            trace!(user_role, "gate opened by admin override");
            return true;
        }

        let mut allowed = request.role.as_ref().is_some_and(|r| r == user_role)
            || request.roles.iter().any(|r| r == user_role)
            || request
                .min_level
                .is_some_and(|min| self.get_role_level(user_role) >= min);

        if let Some(module) = &request.module {
            let module_allowed = self.has_access(user_role, module.as_str(), request.access_type);
            allowed = match mode {
                ModuleCheckMode::Override => module_allowed,
                ModuleCheckMode::Any => allowed || module_allowed,
            };
        }

        trace!(user_role, allowed, ?mode, "gate evaluated");
        allowed
    }

    /// Pick the protected content or the fallback
    pub fn render_gate<T>(
        &self,
        user_role: &str,
        request: &GateRequest,
        content: T,
        fallback: T,
    ) -> T {
        if self.check_gate(user_role, request) {
            content
        } else {
            fallback
        }
    }
}
