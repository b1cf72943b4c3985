// ============================================================================
// Console Core - Navigation Service
// File: crates/console-core/src/services/navigation_service.rs
// ============================================================================
//! Permission-aware sidebar filtering.
//!
//! The filter runs three passes, each producing a new tree:
//! 1. role overrides mark denylisted paths hidden for the roles that own them,
//! 2. hidden and unauthorized items are dropped, parents survive only through
//!    surviving children,
//! 3. groups left without items are removed.

use tracing::debug;

use crate::domain::{default_navigation, AuthContext, NavGroup, NavItem, Session, VisibilityOverride};

/// Pure tree filter over a borrowed navigation tree.
#[derive(Debug, Clone, Default)]
pub struct NavigationFilter {
    overrides: Vec<VisibilityOverride>,
}

impl NavigationFilter {
    pub fn new(overrides: Vec<VisibilityOverride>) -> Self {
        Self { overrides }
    }

    pub fn overrides(&self) -> &[VisibilityOverride] {
        &self.overrides
    }

    pub fn apply(&self, groups: &[NavGroup], ctx: &AuthContext) -> Vec<NavGroup> {
        let marked = self.mark_overridden(groups, ctx);
        let filtered = filter_permitted(&marked, ctx);
        prune_empty_groups(filtered)
    }

    /// Pass 1: role-based visibility overrides.
    fn mark_overridden(&self, groups: &[NavGroup], ctx: &AuthContext) -> Vec<NavGroup> {
        let active: Vec<&VisibilityOverride> = self
            .overrides
            .iter()
            .filter(|o| ctx.holds_role(&o.role))
            .collect();

        groups
            .iter()
            .map(|group| NavGroup {
                name: group.name.clone(),
                items: group.items.iter().map(|item| mark_item(item, &active)).collect(),
            })
            .collect()
    }
}

fn mark_item(item: &NavItem, active: &[&VisibilityOverride]) -> NavItem {
    let mut marked = item.clone();
    if active.iter().any(|o| o.hides(item)) {
        debug!(path = %item.path, "Navigation entry hidden by role override");
        marked.hidden = true;
    }
    marked.children = item.children.iter().map(|child| mark_item(child, active)).collect();
    marked
}

/// Pass 2: permission/role filter.
fn filter_permitted(groups: &[NavGroup], ctx: &AuthContext) -> Vec<NavGroup> {
    groups
        .iter()
        .map(|group| NavGroup {
            name: group.name.clone(),
            items: filter_items(&group.items, ctx),
        })
        .collect()
}

fn filter_items(items: &[NavItem], ctx: &AuthContext) -> Vec<NavItem> {
    items.iter().filter_map(|item| filter_item(item, ctx)).collect()
}

fn filter_item(item: &NavItem, ctx: &AuthContext) -> Option<NavItem> {
    if item.hidden {
        return None;
    }

    if item.is_leaf() {
        return is_permitted(item, ctx).then(|| item.clone());
    }

    // Parents act as containers: they are shown exactly when a child is.
    let children = filter_items(&item.children, ctx);
    if children.is_empty() {
        return None;
    }

    Some(NavItem {
        children,
        ..item.clone()
    })
}

/// No `auth` means visible to everyone; an empty list matches nobody.
fn is_permitted(item: &NavItem, ctx: &AuthContext) -> bool {
    match &item.auth {
        None => true,
        Some(codes) => ctx.grants_any(codes),
    }
}

/// Pass 3: drop groups whose items are all gone.
fn prune_empty_groups(groups: Vec<NavGroup>) -> Vec<NavGroup> {
    groups.into_iter().filter(|g| !g.items.is_empty()).collect()
}

/// Holds the static sidebar and filters it per session.
#[derive(Debug, Clone)]
pub struct NavigationService {
    tree: Vec<NavGroup>,
    filter: NavigationFilter,
}

impl NavigationService {
    pub fn new(tree: Vec<NavGroup>, filter: NavigationFilter) -> Self {
        Self { tree, filter }
    }

    /// Default sidebar with the given overrides.
    pub fn with_overrides(overrides: Vec<VisibilityOverride>) -> Self {
        Self::new(default_navigation(), NavigationFilter::new(overrides))
    }

    pub fn tree(&self) -> &[NavGroup] {
        &self.tree
    }

    pub fn visible_for(&self, ctx: &AuthContext) -> Vec<NavGroup> {
        let groups = self.filter.apply(&self.tree, ctx);
        debug!(
            groups = groups.len(),
            roles = ?ctx.role_codes,
            "Computed visible navigation"
        );
        groups
    }

    /// Signed-out users only see entries without `auth`.
    pub fn visible_for_session(&self, session: Option<&Session>) -> Vec<NavGroup> {
        match session {
            Some(session) => self.visible_for(&session.auth_context()),
            None => self.visible_for(&AuthContext::anonymous()),
        }
    }

    /// Whether `path` is reachable through the filtered tree.
    pub fn can_access(&self, ctx: &AuthContext, path: &str) -> bool {
        fn contains(items: &[NavItem], path: &str) -> bool {
            items
                .iter()
                .any(|i| i.matches_path(path) || contains(&i.children, path))
        }

        self.visible_for(ctx)
            .iter()
            .any(|g| contains(&g.items, path))
    }
}
