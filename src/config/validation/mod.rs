//! Configuration validation
//!
//! - `trait_def`: core Validate trait definition
//! - `rbac_validators`: RbacConfig validator
//! - `policy_validators`: load-time checks over the policy tables
//! - `tests`: test suite for all validators

mod policy_validators;
mod rbac_validators;
mod trait_def;

pub use policy_validators::{PolicyReport, validate_policy};
pub use trait_def::Validate;
