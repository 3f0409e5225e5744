//! Route access resolution
//!
//! Routes are namespaced by actor (`/employee/...`, `/finance/...`) rather
//! than by module, so this resolver works on path segments and the role
//! hierarchy only. It never consults the module access matrix.

use tracing::trace;

use super::system::RbacSystem;
use super::types::{RouteAccess, RouteAccessLevel, RouteTarget};

/// Split a path into its owner namespace and module candidate
///
/// Segment 0 is whatever precedes the first `/` (empty for absolute paths).
pub fn parse_route(path: &str) -> RouteTarget<'_> {
    let mut segments = path.split('/').skip(1);
    let namespace = segments.next().filter(|s| !s.is_empty());
    let module = segments.next().filter(|s| !s.is_empty());
    RouteTarget { namespace, module }
}

impl RbacSystem {
    /// Decide whether `role` may open `path`
    ///
    /// Checked in order: admin override, self-service namespace, own
    /// namespace, then hierarchy rank against the namespace's role.
    pub fn get_route_access(&self, role: &str, path: &str) -> RouteAccess {
        let access = self.resolve_route(role, path);
        trace!(
            role,
            path,
            has_access = access.has_access,
            level = ?access.access_level,
            "resolved route access"
        );
        access
    }

    fn resolve_route(&self, role: &str, path: &str) -> RouteAccess {
        if self.is_admin_role(role) {
            return RouteAccess::granted(RouteAccessLevel::Full);
        }

        let Some(namespace) = parse_route(path).namespace else {
            return RouteAccess::DENIED;
        };

        if namespace == self.config.self_service_namespace {
            return RouteAccess::granted(RouteAccessLevel::Basic);
        }

        if namespace == role {
            return RouteAccess::granted(RouteAccessLevel::Management);
        }

        if self.get_role_level(role) > self.namespace_level(namespace) {
            return RouteAccess::granted(RouteAccessLevel::Elevated);
        }

        RouteAccess::DENIED
    }

    /// Route guard shorthand
    pub fn can_access_route(&self, role: &str, path: &str) -> bool {
        self.get_route_access(role, path).has_access
    }
}
