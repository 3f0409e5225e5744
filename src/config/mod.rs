//! Configuration management for the policy engine
//!
//! This module handles loading, validation, and merging of configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::auth::rbac::RoleId;
use crate::utils::error::{RbacError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix shared by every environment variable read here
pub const ENV_PREFIX: &str = "PORTAL_RBAC_";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Policy engine configuration
    #[serde(default)]
    pub rbac: RbacConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .map_err(|e| RbacError::config(format!("Failed to read config file: {}", e)))?;

        let mut config: Config = serde_yaml::from_str(&content)
            .map_err(|e| RbacError::config(format!("Failed to parse config: {}", e)))?;

        // Policy paths are relative to the config file
        if let Some(policy) = config.rbac.policy_file.take() {
            config.rbac.policy_file = Some(resolve_relative(path, policy));
        }

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from `PORTAL_RBAC_*` environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        let config = Self::default().merge(ConfigOverrides::from_env()?);
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from a variable lookup (unprefixed names are prefixed here)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self::default().merge(ConfigOverrides::from_lookup(lookup)?))
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.rbac
            .validate()
            .map_err(|e| RbacError::config(format!("RBAC config error: {}", e)))?;

        warn_lenient_config(&self.rbac);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Layer overrides on top (every key set in `other` wins)
    pub fn merge(mut self, other: ConfigOverrides) -> Self {
        self.rbac = self.rbac.merge(other.rbac);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RbacError::config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| RbacError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

/// Settings layered over a loaded configuration
///
/// Built from the environment or from command-line flags; only the keys that
/// were actually given are applied by [`Config::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub rbac: RbacOverrides,
    pub logging: LoggingOverrides,
}

impl ConfigOverrides {
    /// Read overrides from `PORTAL_RBAC_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read overrides from a variable lookup (unprefixed names are prefixed here)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));
        let mut overrides = Self::default();

        overrides.rbac.fallback_role = var("FALLBACK_ROLE").map(RoleId::from);
        overrides.rbac.admin_role = var("ADMIN_ROLE").map(RoleId::from);
        overrides.rbac.self_service_namespace = var("SELF_SERVICE_NAMESPACE");
        overrides.rbac.restricted_marker = var("RESTRICTED_MARKER");
        overrides.rbac.policy_file = var("POLICY_FILE").map(PathBuf::from);

        if let Some(mode) = var("MODULE_CHECK_MODE") {
            overrides.rbac.module_check_mode = Some(mode.parse().map_err(RbacError::config)?);
        }
        if let Some(strict) = var("STRICT") {
            overrides.rbac.strict = Some(
                parse_bool(&strict)
                    .ok_or_else(|| RbacError::config(format!("Invalid strict flag: {}", strict)))?,
            );
        }
        if let Some(level) = var("LOG_LEVEL") {
            overrides.logging.level = Some(level.parse()?);
        }
        if let Some(json) = var("LOG_JSON") {
            overrides.logging.json = Some(
                parse_bool(&json)
                    .ok_or_else(|| RbacError::config(format!("Invalid log json flag: {}", json)))?,
            );
        }

        debug!("Read configuration overrides: {:?}", overrides);
        Ok(overrides)
    }
}

fn resolve_relative(config_path: &Path, target: PathBuf) -> PathBuf {
    if target.is_absolute() {
        return target;
    }
    match config_path.parent() {
        Some(dir) => dir.join(target),
        None => target,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
