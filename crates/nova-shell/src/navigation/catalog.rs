//! Navigation catalog.
//!
//! The catalog is fixed at construction time. Order is significant: it is
//! both the rendered order and the order in which dividers appear, and every
//! consumer sees the same order.

use std::collections::HashSet;

use super::entry::NavigationEntry;
use crate::error::{Result, ShellError};
use crate::role::Role;

/// Ordered registry of navigation entries with unique paths and ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCatalog {
    entries: Vec<NavigationEntry>,
}

impl NavigationCatalog {
    /// Build a catalog, rejecting duplicate paths or ids.
    pub fn new(entries: Vec<NavigationEntry>) -> Result<Self> {
        let mut paths = HashSet::new();
        let mut ids = HashSet::new();

        for entry in &entries {
            if !paths.insert(entry.path.as_str()) {
                return Err(ShellError::DuplicatePath {
                    path: entry.path.clone(),
                });
            }
            if !ids.insert(entry.id.as_str()) {
                return Err(ShellError::DuplicateId {
                    id: entry.id.clone(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// The NovaBank banking catalog.
    pub fn banking() -> Self {
        Self {
            entries: vec![
                NavigationEntry::new("dashboard", "Dashboard", "/", "dashboard"),
                NavigationEntry::new("accounts", "Accounts", "/accounts", "account-balance"),
                NavigationEntry::new("transfer", "Transfer", "/transfer", "swap-horiz"),
                NavigationEntry::new("transactions", "Transactions", "/transactions", "receipt")
                    .divider_after(),
                NavigationEntry::new("admin", "Admin", "/admin", "admin-panel-settings")
                    .requires(Role::Admin)
                    .divider_after(),
                NavigationEntry::new("profile", "Profile", "/profile", "person"),
                NavigationEntry::new("settings", "Settings", "/settings", "settings"),
            ],
        }
    }

    /// Entries visible to `role`, in catalog order.
    ///
    /// The iterator is lazy and can be cloned to walk the view again; the
    /// catalog itself is never modified.
    pub fn resolve_visible(
        &self,
        role: Role,
    ) -> impl Iterator<Item = &NavigationEntry> + Clone + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.is_visible_to(role))
    }

    pub fn entry_by_path(&self, path: &str) -> Option<&NavigationEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NavigationCatalog {
    fn default() -> Self {
        Self::banking()
    }
}

/// First entry whose path equals `current_path` exactly.
///
/// No prefix or wildcard matching: `/account` does not select
/// `/accounts/1`. An unknown path simply selects nothing.
pub fn find_selected<'a, I>(entries: I, current_path: &str) -> Option<&'a NavigationEntry>
where
    I: IntoIterator<Item = &'a NavigationEntry>,
{
    entries
        .into_iter()
        .find(|entry| entry.path == current_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles<'a>(entries: impl Iterator<Item = &'a NavigationEntry>) -> Vec<&'a str> {
        entries.map(|entry| entry.title.as_str()).collect()
    }

    #[test]
    fn test_banking_catalog_is_valid() {
        let banking = NavigationCatalog::banking();
        let rebuilt = NavigationCatalog::new(banking.entries().to_vec()).unwrap();
        assert_eq!(rebuilt, banking);
        assert_eq!(banking.len(), 7);
    }

    #[test]
    fn test_user_does_not_see_admin_entry() {
        let catalog = NavigationCatalog::banking();
        assert_eq!(
            titles(catalog.resolve_visible(Role::User)),
            [
                "Dashboard",
                "Accounts",
                "Transfer",
                "Transactions",
                "Profile",
                "Settings"
            ]
        );
    }

    #[test]
    fn test_admin_sees_everything_in_order() {
        let catalog = NavigationCatalog::banking();
        let visible: Vec<_> = catalog.resolve_visible(Role::Admin).collect();
        assert_eq!(visible.len(), catalog.len());
        assert!(visible.iter().zip(catalog.entries()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_admin_divider_excluded_with_entry() {
        let catalog = NavigationCatalog::banking();
        let dividers: Vec<_> = catalog
            .resolve_visible(Role::User)
            .filter(|entry| entry.divider_after)
            .map(|entry| entry.id.as_str())
            .collect();
        assert_eq!(dividers, ["transactions"]);
    }

    #[test]
    fn test_resolve_visible_is_restartable() {
        let catalog = NavigationCatalog::banking();
        let visible = catalog.resolve_visible(Role::User);
        let first = titles(visible.clone());
        let second = titles(visible);
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_selected_exact_match() {
        let catalog = NavigationCatalog::banking();
        let selected = find_selected(catalog.resolve_visible(Role::User), "/transfer");
        assert_eq!(selected.map(|entry| entry.id.as_str()), Some("transfer"));
        assert!(find_selected(catalog.resolve_visible(Role::User), "/unknown").is_none());
    }

    #[test]
    fn test_find_selected_ignores_hidden_entries() {
        let catalog = NavigationCatalog::banking();
        assert!(find_selected(catalog.resolve_visible(Role::User), "/admin").is_none());
        assert!(find_selected(catalog.resolve_visible(Role::Admin), "/admin").is_some());
    }

    #[test]
    fn test_find_selected_never_prefix_matches() {
        let catalog = NavigationCatalog::new(vec![
            NavigationEntry::new("account", "Account", "/account", "person"),
            NavigationEntry::new("accounts", "Accounts", "/accounts", "account-balance"),
        ])
        .unwrap();
        assert!(find_selected(catalog.entries(), "/accounts/1").is_none());
        assert!(find_selected(catalog.entries(), "/acc").is_none());
        assert_eq!(
            find_selected(catalog.entries(), "/account").map(|entry| entry.id.as_str()),
            Some("account")
        );
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let result = NavigationCatalog::new(vec![
            NavigationEntry::new("home", "Home", "/", "dashboard"),
            NavigationEntry::new("dashboard", "Dashboard", "/", "dashboard"),
        ]);
        assert!(matches!(result, Err(ShellError::DuplicatePath { path }) if path == "/"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = NavigationCatalog::new(vec![
            NavigationEntry::new("home", "Home", "/", "dashboard"),
            NavigationEntry::new("home", "Home again", "/home", "dashboard"),
        ]);
        assert!(matches!(result, Err(ShellError::DuplicateId { id }) if id == "home"));
    }

    #[test]
    fn test_entry_by_path() {
        let catalog = NavigationCatalog::banking();
        assert_eq!(
            catalog.entry_by_path("/settings").map(|entry| entry.title.as_str()),
            Some("Settings")
        );
        assert!(catalog.entry_by_path("/settings/").is_none());
    }
}
