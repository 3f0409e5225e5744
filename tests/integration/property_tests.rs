//! Property tests over the decision functions

#[cfg(test)]
mod tests {
    use crate::common::PolicyFactory;
    use portal_rbac::auth::rbac::{AccessLevel, ModuleId, RbacSystem, RouteAccessLevel};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    const ROLES: [&str; 7] = ["employee", "supervisor", "finance", "hr", "it", "admin", "ghost"];

    fn engine() -> RbacSystem {
        PolicyFactory::default_engine()
    }

    fn arb_role() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(ROLES.to_vec()).prop_map(|r| r.to_string()),
            "[a-z-]{0,12}",
        ]
    }

    fn arb_module() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(ModuleId::BUILTIN.to_vec()).prop_map(|m| m.to_string()),
            "[a-z-]{0,16}",
        ]
    }

    proptest! {
        #[test]
        fn unknown_modules_grant_nothing(role in arb_role(), module in "[a-z-]{0,16}") {
            let rbac = engine();
            prop_assume!(!rbac.policy().modules.contains_key(module.as_str()));

            prop_assert!(!rbac.has_base_access(&role, &module));
            prop_assert!(!rbac.has_management_access(&role, &module));
            prop_assert!(!rbac.has_approval_access(&role, &module));
            prop_assert_eq!(rbac.get_user_access_level(&role, &module), AccessLevel::None);
        }

        #[test]
        fn management_always_wins(role in arb_role(), module in arb_module()) {
            let rbac = engine();
            if rbac.has_management_access(&role, &module) {
                prop_assert_eq!(
                    rbac.get_user_access_level(&role, &module),
                    AccessLevel::Management
                );
            }
        }

        #[test]
        fn access_level_agrees_with_tiers(role in arb_role(), module in arb_module()) {
            let rbac = engine();
            let level = rbac.get_user_access_level(&role, &module);
            let any_tier = rbac.has_base_access(&role, &module)
                || rbac.has_approval_access(&role, &module)
                || rbac.has_management_access(&role, &module);
            prop_assert_eq!(level != AccessLevel::None, any_tier);
        }

        #[test]
        fn admin_route_override_holds_for_any_path(path in ".{0,40}") {
            let access = engine().get_route_access("admin", &path);
            prop_assert!(access.has_access);
            prop_assert_eq!(access.access_level, RouteAccessLevel::Full);
        }

        #[test]
        fn self_service_routes_open_to_everyone(role in arb_role(), rest in "[a-z/-]{0,20}") {
            let path = format!("/employee/{}", rest);
            let access = engine().get_route_access(&role, &path);
            prop_assert!(access.has_access);
        }

        #[test]
        fn route_grants_carry_a_level(role in arb_role(), path in "/?[a-z]{0,8}(/[a-z-]{0,8}){0,2}") {
            let access = engine().get_route_access(&role, &path);
            prop_assert_eq!(access.has_access, access.access_level != RouteAccessLevel::None);
        }

        #[test]
        fn decisions_are_stable(role in arb_role(), module in arb_module(), path in ".{0,30}") {
            let rbac = engine();
            prop_assert_eq!(
                rbac.get_user_access_level(&role, &module),
                rbac.get_user_access_level(&role, &module)
            );
            prop_assert_eq!(
                rbac.get_route_access(&role, &path),
                rbac.get_route_access(&role, &path)
            );
            prop_assert_eq!(
                rbac.get_navigation_items(&role),
                rbac.get_navigation_items(&role)
            );
        }

        #[test]
        fn managed_modules_are_exactly_the_management_rows(role in arb_role()) {
            let rbac = engine();
            let managed: BTreeSet<ModuleId> =
                rbac.get_user_managed_modules(&role).into_iter().collect();
            let expected: BTreeSet<ModuleId> = rbac
                .policy()
                .modules
                .iter()
                .filter(|(_, access)| access.management_access.contains(role.as_str()))
                .map(|(id, _)| id.clone())
                .collect();
            prop_assert_eq!(managed, expected);
        }

        #[test]
        fn admin_outranks_every_other_role(role in arb_role()) {
            let rbac = engine();
            prop_assume!(role != "admin");
            prop_assert!(rbac.get_role_info("admin").level > rbac.get_role_info(&role).level);
        }
    }
}
