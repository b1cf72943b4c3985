// ============================================================================
// Console Core - Navigation Tree
// File: crates/console-core/src/domain/navigation.rs
// Description: Sidebar navigation items, groups and the static default tree
// ============================================================================

use serde::{Deserialize, Serialize};

use console_shared::constants::{OWNER_ROLE_CODE, SUPERADMIN_ROLE_CODE};

/// Navigation entry. `auth` lists permission or role codes, any of which
/// grants visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub path: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn new(title: &str, path: &str, icon: &str) -> Self {
        Self {
            title: title.to_string(),
            path: path.to_string(),
            icon: icon.to_string(),
            auth: None,
            hidden: false,
            children: Vec::new(),
        }
    }

    pub fn with_auth(mut self, codes: &[&str]) -> Self {
        self.auth = Some(codes.iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn with_children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Path comparison ignoring a trailing slash.
    pub fn matches_path(&self, path: &str) -> bool {
        normalize_path(&self.path) == normalize_path(path)
    }
}

/// Named bucket of top-level navigation items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    pub name: String,
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl NavGroup {
    pub fn new(name: &str, items: Vec<NavItem>) -> Self {
        Self { name: name.to_string(), items }
    }
}

/// Hides `paths` from users holding `role`, even when their permissions
/// would otherwise show the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityOverride {
    pub role: String,
    pub paths: Vec<String>,
}

impl VisibilityOverride {
    pub fn new(role: &str, paths: &[&str]) -> Self {
        Self {
            role: role.to_string(),
            paths: paths.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn hides(&self, item: &NavItem) -> bool {
        self.paths.iter().any(|p| item.matches_path(p))
    }
}

fn normalize_path(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// The console sidebar as shipped.
pub fn default_navigation() -> Vec<NavGroup> {
    vec![
        NavGroup::new(
            "Overview",
            vec![NavItem::new("Dashboard", "/dashboard", "layout-dashboard")],
        ),
        NavGroup::new(
            "Inventory",
            vec![
                NavItem::new("Assets", "/assets", "key-round")
                    .with_auth(&["assets.read", SUPERADMIN_ROLE_CODE, OWNER_ROLE_CODE]),
                NavItem::new("Showrooms", "/showrooms", "store").with_children(vec![
                    NavItem::new("All Showrooms", "/showrooms", "list")
                        .with_auth(&["showrooms.read", SUPERADMIN_ROLE_CODE, OWNER_ROLE_CODE]),
                    NavItem::new("Templates", "/showrooms/templates", "layout-template")
                        .with_auth(&["showrooms.manage", SUPERADMIN_ROLE_CODE, OWNER_ROLE_CODE]),
                ]),
            ],
        ),
        NavGroup::new(
            "Administration",
            vec![
                NavItem::new("Clients", "/clients", "building-2")
                    .with_auth(&[SUPERADMIN_ROLE_CODE, OWNER_ROLE_CODE]),
                NavItem::new("Roles", "/roles", "shield")
                    .with_auth(&["roles.read", SUPERADMIN_ROLE_CODE]),
            ],
        ),
        NavGroup::new(
            "Account",
            vec![NavItem::new("Notifications", "/notifications", "bell")],
        ),
    ]
}
