//! Error handling for the policy engine
//!
//! Decision functions never fail; only configuration loading and policy
//! validation produce errors.

mod helpers;
mod types;

pub use types::{RbacError, Result};
