#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::collections::BTreeSet;

/// Sidebar UI state: which groups are open and whether the sidebar is
/// collapsed to its icon rail. Local to the page; a reload resets it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub expanded: BTreeSet<String>,
    pub sidebar_collapsed: bool,
}

impl NavigationState {
    /// Open `name` if closed, close it if open.
    pub fn toggle_group(&mut self, name: &str) {
        if !self.expanded.remove(name) {
            self.expanded.insert(name.to_owned());
        }
    }

    #[must_use]
    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.contains(name)
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}
