//! RBAC system core functionality

use crate::config::RbacConfig;
use crate::config::validation::validate_policy;
use crate::utils::error::{RbacError, Result};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use super::policy::AccessPolicy;
use super::types::RoleInfo;

/// Policy engine over a validated role registry and module access matrix
///
/// Immutable once built; every query is a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct RbacSystem {
    /// RBAC configuration
    pub(super) config: RbacConfig,
    /// Role registry, module matrix and navigation layout
    pub(super) policy: AccessPolicy,
    /// Registry entry returned for unknown role keys
    pub(super) fallback: RoleInfo,
}

impl RbacSystem {
    /// Create a new RBAC system, loading the policy file named by the config
    /// or the built-in tables
    pub fn new(config: &RbacConfig) -> Result<Self> {
        info!("Initializing RBAC system");

        let policy = match &config.policy_file {
            Some(path) => AccessPolicy::from_file(path)?,
            None => AccessPolicy::default(),
        };

        Self::with_policy(config.clone(), policy)
    }

    /// Create an RBAC system over an explicit policy
    pub fn with_policy(config: RbacConfig, policy: AccessPolicy) -> Result<Self> {
        let warnings = validate_policy(&policy, &config)
            .into_result()
            .map_err(RbacError::validation)?;
        for warning in &warnings {
            warn!("{}", warning);
        }

        let rbac = Self::from_parts(config, policy);
        info!(
            "RBAC system initialized with {} roles and {} modules",
            rbac.policy.roles.len(),
            rbac.policy.modules.len()
        );
        Ok(rbac)
    }

    /// Built-in tables with default configuration
    ///
    /// The built-in policy is covered by unit tests, so no validation runs here.
    pub fn builtin() -> Self {
        Self::from_parts(RbacConfig::default(), AccessPolicy::default())
    }

    fn from_parts(config: RbacConfig, policy: AccessPolicy) -> Self {
        let fallback = match policy.roles.get(&config.fallback_role) {
            Some(info) => info.clone(),
            None => {
                warn!(
                    "Fallback role '{}' is not registered, unknown roles get no privileges",
                    config.fallback_role
                );
                RoleInfo {
                    level: 0,
                    name: "Unknown".to_string(),
                    description: String::new(),
                    capabilities: BTreeSet::new(),
                    management_domains: BTreeSet::new(),
                    landing_route: None,
                }
            }
        };
        debug!("Fallback role resolved to '{}'", fallback.name);

        Self {
            config,
            policy,
            fallback,
        }
    }

    pub fn config(&self) -> &RbacConfig {
        &self.config
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }
}
