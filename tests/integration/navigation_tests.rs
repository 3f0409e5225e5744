//! Navigation menu tests
//!
//! Menus are rendered straight from this output, so section order and
//! contents are pinned per role.

#[cfg(test)]
mod tests {
    use portal_rbac::NavItem;
    use portal_rbac::auth::get_navigation_items;

    fn labels(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(NavItem::label).collect()
    }

    #[test]
    fn test_menu_labels_per_role() {
        assert_eq!(
            labels(&get_navigation_items("employee")),
            vec!["Dashboard", "Employee Services"]
        );
        assert_eq!(
            labels(&get_navigation_items("supervisor")),
            vec!["Dashboard", "Employee Services", "Team Management"]
        );
        assert_eq!(
            labels(&get_navigation_items("finance")),
            vec!["Dashboard", "Employee Services", "Finance"]
        );
        assert_eq!(
            labels(&get_navigation_items("hr")),
            vec!["Dashboard", "Employee Services", "HR"]
        );
        assert_eq!(
            labels(&get_navigation_items("it")),
            vec!["Dashboard", "Employee Services", "IT"]
        );
        assert_eq!(
            labels(&get_navigation_items("admin")),
            vec![
                "Dashboard",
                "Employee Services",
                "Team Management",
                "Finance",
                "HR",
                "IT",
                "System Administration"
            ]
        );
    }

    #[test]
    fn test_every_role_starts_with_shared_sections() {
        for role in ["employee", "supervisor", "finance", "hr", "it", "admin", "visitor"] {
            let items = get_navigation_items(role);
            assert!(matches!(&items[0], NavItem::Link { id, .. } if id == "dashboard"));
            assert!(matches!(&items[1], NavItem::Group { id, .. } if id == "employee-services"));
        }
    }

    #[test]
    fn test_group_children_are_links() {
        let items = get_navigation_items("admin");
        for item in &items {
            for child in item.children() {
                match child {
                    NavItem::Link { path, .. } => assert!(path.starts_with('/')),
                    NavItem::Group { .. } => panic!("nested group under {}", item.id()),
                }
            }
        }
    }

    #[test]
    fn test_finance_menu_json_snapshot() {
        let json = serde_json::to_value(get_navigation_items("finance")).unwrap();
        let expected = serde_json::json!({
            "type": "group",
            "id": "finance",
            "label": "Finance",
            "icon": "dollar-sign",
            "children": [
                {
                    "type": "link",
                    "id": "cash-approvals",
                    "label": "Cash Approvals",
                    "path": "/finance/cash-approvals",
                    "icon": "dollar-sign"
                },
                {
                    "type": "link",
                    "id": "invoice-management",
                    "label": "Invoice Management",
                    "path": "/finance/invoices",
                    "icon": "file-text"
                }
            ]
        });
        assert_eq!(json[2], expected);
    }
}
