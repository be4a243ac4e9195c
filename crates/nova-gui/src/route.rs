//! Route table.
//!
//! Maps the current path to the page mounted in the content region. Every
//! navigation entry currently shows the dashboard placeholder.

/// Page mounted in the content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    NotFound,
}

const ROUTES: &[(&str, Page)] = &[
    ("/", Page::Dashboard),
    ("/accounts", Page::Dashboard),
    ("/transfer", Page::Dashboard),
    ("/transactions", Page::Dashboard),
    ("/admin", Page::Dashboard),
    ("/profile", Page::Dashboard),
    ("/settings", Page::Dashboard),
];

impl Page {
    /// Exact-path lookup; anything unknown is `NotFound`.
    pub fn resolve(path: &str) -> Self {
        ROUTES
            .iter()
            .find(|(route, _)| *route == path)
            .map_or(Self::NotFound, |(_, page)| *page)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::NotFound => "Page not found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_shell::{NavigationCatalog, Role};

    #[test]
    fn test_every_catalog_entry_has_a_page() {
        let catalog = NavigationCatalog::banking();
        for entry in catalog.resolve_visible(Role::Admin) {
            assert_eq!(Page::resolve(&entry.path), Page::Dashboard, "{}", entry.path);
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(Page::resolve("/loans"), Page::NotFound);
        assert_eq!(Page::resolve("/accounts/1"), Page::NotFound);
        assert_eq!(Page::resolve(""), Page::NotFound);
    }
}
