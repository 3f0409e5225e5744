//! Role-Based Access Control (RBAC) system
//!
//! Role registry, module access matrix, and the decisions derived from them:
//! module tiers, route access, component gates and navigation menus.

mod gate;
mod helpers;
mod navigation;
mod permissions;
mod policy;
mod roles;
mod routes;
mod system;
mod types;

// Re-export public types and structs
pub use gate::GateRequest;
pub use navigation::{NavChild, NavItem, NavSection, Visibility};
pub use policy::AccessPolicy;
pub use routes::parse_route;
pub use system::RbacSystem;
pub use types::{
    AccessLevel, AccessType, ModuleAccess, ModuleId, RoleId, RoleInfo, RouteAccess,
    RouteAccessLevel, RouteTarget,
};
