//! Property-based tests for role filtering and selection.

use nova_shell::{NavigationCatalog, NavigationEntry, Role, find_selected};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Admin), Just(Role::User)]
}

/// Catalog of up to 12 entries with unique `/pN` paths and random gating.
fn catalog() -> impl Strategy<Value = NavigationCatalog> {
    prop::collection::vec((prop::option::of(role()), any::<bool>()), 0..12).prop_map(|specs| {
        let entries = specs
            .into_iter()
            .enumerate()
            .map(|(i, (required, divider))| {
                let mut entry =
                    NavigationEntry::new(format!("e{i}"), format!("Entry {i}"), format!("/p{i}"), "dot");
                if let Some(role) = required {
                    entry = entry.requires(role);
                }
                if divider {
                    entry = entry.divider_after();
                }
                entry
            })
            .collect();
        NavigationCatalog::new(entries).unwrap()
    })
}

proptest! {
    /// Property: visible entries are exactly the unrestricted ones plus those
    /// requiring the given role, in catalog order
    #[test]
    fn prop_resolve_visible_filters_in_order(catalog in catalog(), role in role()) {
        let visible: Vec<_> = catalog.resolve_visible(role).collect();
        let expected: Vec<_> = catalog
            .entries()
            .iter()
            .filter(|entry| entry.required_role.is_none() || entry.required_role == Some(role))
            .collect();
        prop_assert_eq!(visible, expected);
    }

    /// Property: resolving twice yields the same sequence and leaves the
    /// catalog untouched
    #[test]
    fn prop_resolve_visible_is_restartable(catalog in catalog(), role in role()) {
        let before = catalog.clone();
        let first: Vec<_> = catalog.resolve_visible(role).map(|entry| entry.id.clone()).collect();
        let second: Vec<_> = catalog.resolve_visible(role).map(|entry| entry.id.clone()).collect();
        prop_assert_eq!(first, second);
        prop_assert_eq!(catalog, before);
    }

    /// Property: selection is the visible entry with the exact path, if any
    #[test]
    fn prop_find_selected_exact(catalog in catalog(), role in role(), index in 0usize..16) {
        let path = format!("/p{index}");
        let selected = find_selected(catalog.resolve_visible(role), &path);
        let expected = catalog
            .entries()
            .get(index)
            .filter(|entry| entry.is_visible_to(role));
        prop_assert_eq!(selected, expected);
    }

    /// Property: a path extended past an entry's path never selects it
    #[test]
    fn prop_find_selected_never_prefix_matches(catalog in catalog(), suffix in "[a-z0-9/]{1,6}") {
        for entry in catalog.entries() {
            let longer = format!("{}{}", entry.path, suffix);
            let selected = find_selected(catalog.entries(), &longer);
            prop_assert!(selected.is_none_or(|found| found.path == longer));
        }
    }
}
