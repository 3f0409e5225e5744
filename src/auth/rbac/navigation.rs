//! Navigation menu builder
//!
//! Turns the policy's navigation layout into the menu tree shown to one role.
//! Section order is taken verbatim from the layout.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::system::RbacSystem;
use super::types::{ModuleId, RoleId};

/// Rendered menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavItem {
    Link {
        id: String,
        label: String,
        path: String,
        icon: String,
    },
    Group {
        id: String,
        label: String,
        icon: String,
        children: Vec<NavItem>,
    },
}

impl NavItem {
    pub fn id(&self) -> &str {
        match self {
            NavItem::Link { id, .. } | NavItem::Group { id, .. } => id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NavItem::Link { label, .. } | NavItem::Group { label, .. } => label,
        }
    }

    /// Children of a group; empty for links
    pub fn children(&self) -> &[NavItem] {
        match self {
            NavItem::Link { .. } => &[],
            NavItem::Group { children, .. } => children,
        }
    }
}

/// Who sees a navigation section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Everyone,
    /// Exact role match against the list
    Roles { roles: Vec<RoleId> },
    /// Roles managing at least one child's module; unmanaged children are dropped
    ManagesAny,
}

/// Top-level entry of the navigation layout
///
/// Rendered as a link when `path` is set, otherwise as a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub visible_to: Visibility,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavChild>,
}

/// Leaf inside a navigation section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavChild {
    pub id: String,
    pub label: String,
    pub path: String,
    #[serde(default)]
    pub icon: String,
    /// Module this entry belongs to, used by `manages_any` sections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleId>,
}

impl NavChild {
    fn render(&self) -> NavItem {
        NavItem::Link {
            id: self.id.clone(),
            label: self.label.clone(),
            path: self.path.clone(),
            icon: self.icon.clone(),
        }
    }
}

impl RbacSystem {
    /// Build the navigation menu for a role
    pub fn get_navigation_items(&self, role: &str) -> Vec<NavItem> {
        let items: Vec<NavItem> = self
            .policy
            .navigation
            .iter()
            .filter_map(|section| self.render_section(role, section))
            .collect();

        trace!(role, sections = items.len(), "built navigation menu");
        items
    }

    fn render_section(&self, role: &str, section: &NavSection) -> Option<NavItem> {
        let children: Vec<NavItem> = match &section.visible_to {
            Visibility::Everyone => section.children.iter().map(NavChild::render).collect(),
            Visibility::Roles { roles } => {
                if !roles.iter().any(|r| r == role) {
                    return None;
                }
                section.children.iter().map(NavChild::render).collect()
            }
            Visibility::ManagesAny => {
                let manages_any = section.children.iter().any(|child| {
                    child
                        .module
                        .as_ref()
                        .is_some_and(|m| self.has_management_access(role, m.as_str()))
                });
                if !manages_any {
                    return None;
                }
                section
                    .children
                    .iter()
                    .filter(|child| match &child.module {
                        Some(m) => self.has_management_access(role, m.as_str()),
                        None => true,
                    })
                    .map(NavChild::render)
                    .collect()
            }
        };

        let item = match &section.path {
            Some(path) => NavItem::Link {
                id: section.id.clone(),
                label: section.label.clone(),
                path: path.clone(),
                icon: section.icon.clone(),
            },
            None => NavItem::Group {
                id: section.id.clone(),
                label: section.label.clone(),
                icon: section.icon.clone(),
                children,
            },
        };
        Some(item)
    }
}
