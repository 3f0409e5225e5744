//! Default-policy API tests
//!
//! Exercises the free functions backed by the built-in tables, the way UI
//! route guards and gates call them.

#[cfg(test)]
mod tests {
    use crate::common::PolicyFactory;
    use portal_rbac::auth::{
        self, check_gate, get_default_route, get_role_info, get_route_access,
        get_user_access_level, get_user_managed_modules, has_approval_access, has_base_access,
        has_capability, has_management_access,
    };
    use portal_rbac::{AccessLevel, AccessType, GateRequest, ModuleId, RouteAccessLevel};

    // ==================== Registry ====================

    /// Unknown roles resolve to the employee entry
    #[test]
    fn test_get_role_info_fallback() {
        assert_eq!(get_role_info("intern"), get_role_info("employee"));
        assert_eq!(get_role_info("intern").name, "Employee");
        assert_eq!(get_role_info("admin").name, "Administrator");
    }

    #[test]
    fn test_capability_lookup() {
        assert!(has_capability("hr", "manage_sick_leave"));
        assert!(!has_capability("it", "manage_sick_leave"));
        assert!(has_capability("admin", "all"));
    }

    #[test]
    fn test_default_route_for_guards() {
        assert_eq!(get_default_route("supervisor"), "/dashboard");
    }

    // ==================== Module decisions ====================

    #[test]
    fn test_module_tiers() {
        assert!(has_base_access("employee", "it-support"));
        assert!(has_management_access("it", "it-support"));
        assert!(has_approval_access("supervisor", "incident-reports"));
        assert!(!has_approval_access("supervisor", "invoices"));
    }

    #[test]
    fn test_access_levels() {
        assert_eq!(get_user_access_level("hr", "suggestions"), AccessLevel::Management);
        assert_eq!(get_user_access_level("supervisor", "incident-reports"), AccessLevel::Approval);
        assert_eq!(get_user_access_level("it", "invoices"), AccessLevel::Basic);
        assert_eq!(get_user_access_level("it", "budget-codes"), AccessLevel::None);
    }

    #[test]
    fn test_managed_modules() {
        assert_eq!(get_user_managed_modules("it"), vec![ModuleId::IT_SUPPORT]);
        assert!(get_user_managed_modules("employee").is_empty());
    }

    #[test]
    fn test_default_engine_matches_configured_engine() {
        let engine = PolicyFactory::default_engine();
        assert_eq!(auth::default_rbac().policy(), engine.policy());
    }

    // ==================== Route guards ====================

    #[test]
    fn test_route_examples() {
        let access = get_route_access("employee", "/employee/cash-requests");
        assert!(access.has_access);
        assert_eq!(access.access_level, RouteAccessLevel::Basic);

        let access = get_route_access("finance", "/finance/cash-approvals");
        assert!(access.has_access);
        assert_eq!(access.access_level, RouteAccessLevel::Management);

        let access = get_route_access("employee", "/finance/cash-approvals");
        assert!(!access.has_access);
        assert_eq!(access.access_level, RouteAccessLevel::None);

        let access = get_route_access("admin", "/anything/at/all");
        assert!(access.has_access);
        assert_eq!(access.access_level, RouteAccessLevel::Full);
    }

    #[test]
    fn test_elevated_branch_with_synthetic_role() {
        let rbac = PolicyFactory::engine(PolicyFactory::with_auditor());

        let access = rbac.get_route_access("auditor", "/finance/cash-approvals");
        assert!(access.has_access);
        assert_eq!(access.access_level, RouteAccessLevel::Elevated);
        assert_eq!(rbac.get_role_info("auditor").level, 4);
    }

    #[test]
    fn test_route_access_serializes_camel_case() {
        let json = serde_json::to_value(get_route_access("hr", "/hr/sick-leave")).unwrap();
        assert_eq!(json["hasAccess"], true);
        assert_eq!(json["accessLevel"], "management");
    }

    // ==================== Gates ====================

    #[test]
    fn test_gate_free_function() {
        let request = GateRequest::new().module("sick-leave", AccessType::Approval);
        assert!(check_gate("supervisor", &request));
        assert!(!check_gate("employee", &request));
        assert!(check_gate("admin", &request));

        let restricted = GateRequest::new().roles(["hr", "admin-restricted"]);
        assert!(check_gate("hr", &restricted));
        assert!(!check_gate("admin", &restricted));
    }

    #[test]
    fn test_gate_request_from_yaml() {
        let request: GateRequest = serde_yaml::from_str(
            "roles: [finance, hr]\nmin_level: 4\nmodule: pettycash\naccess_type: approval\n",
        )
        .unwrap();

        assert_eq!(request.access_type, AccessType::Approval);
        // The module check overrides the allow-list by default
        assert!(check_gate("supervisor", &request));
        assert!(!check_gate("hr", &request));
    }

    #[test]
    fn test_added_module_needs_no_code_changes() {
        let rbac = PolicyFactory::engine(PolicyFactory::with_fixed_assets());

        assert_eq!(
            rbac.get_user_access_level("finance", "fixed-assets"),
            AccessLevel::Management
        );
        assert_eq!(
            rbac.get_user_access_level("employee", "fixed-assets"),
            AccessLevel::None
        );
        assert!(
            rbac.get_user_managed_modules("finance")
                .contains(&ModuleId::new("fixed-assets"))
        );
    }
}
