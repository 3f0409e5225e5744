//! # portal-rbac
//!
//! Access policy engine for the petty-cash, HR and procurement portal.
//!
//! A static role registry and module access matrix drive every decision:
//! per-module access tiers, route guards, component gates and the navigation
//! menu. All decisions are pure functions of their inputs; unknown roles and
//! modules resolve to the least-privileged answer instead of failing.
//!
//! ```rust
//! use portal_rbac::auth::{get_route_access, get_user_access_level};
//! use portal_rbac::auth::rbac::{AccessLevel, RouteAccessLevel};
//!
//! assert_eq!(
//!     get_user_access_level("finance", "pettycash"),
//!     AccessLevel::Management
//! );
//!
//! let access = get_route_access("employee", "/finance/cash-approvals");
//! assert!(!access.has_access);
//! assert_eq!(access.access_level, RouteAccessLevel::None);
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod utils;

pub use auth::rbac::{
    AccessLevel, AccessPolicy, AccessType, GateRequest, ModuleId, NavItem, RbacSystem, RoleId,
    RoleInfo, RouteAccess, RouteAccessLevel,
};
pub use config::Config;
pub use utils::error::{RbacError, Result};

/// Build metadata captured by the build script
pub mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const GIT_HASH: &str = env!("GIT_HASH");
    pub const BUILD_TIME: &str = env!("BUILD_TIME");
}
