//! Navigation drawer view model.

use crate::collaborator::Navigator;
use crate::layout::{DrawerVariant, ResponsiveLayoutController};
use crate::navigation::{IconId, NavigationCatalog, find_selected};
use crate::role::Role;

pub const BRAND_NAME: &str = "NovaBank";
pub const BRAND_MARK: &str = "NB";

/// One rendered drawer row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemView {
    pub id: String,
    pub title: String,
    pub path: String,
    pub icon: IconId,
    /// Already filtered: zero counts are `None`.
    pub badge: Option<u32>,
    pub selected: bool,
    pub divider_after: bool,
}

/// Drawer contents and entry activation.
pub struct ShellNavigation;

impl ShellNavigation {
    /// Rows for `role`, with the exact-path match for `current_path` selected.
    ///
    /// Entries hidden from the role are absent, not disabled.
    pub fn items(catalog: &NavigationCatalog, role: Role, current_path: &str) -> Vec<NavItemView> {
        let visible = catalog.resolve_visible(role);
        let selected_id = find_selected(visible.clone(), current_path).map(|entry| entry.id.as_str());

        visible
            .map(|entry| NavItemView {
                id: entry.id.clone(),
                title: entry.title.clone(),
                path: entry.path.clone(),
                icon: entry.icon.clone(),
                badge: entry.visible_badge(),
                selected: Some(entry.id.as_str()) == selected_id,
                divider_after: entry.divider_after,
            })
            .collect()
    }

    /// Navigate to `path`, then close the drawer if it is an overlay.
    pub fn activate(path: &str, layout: &mut ResponsiveLayoutController, navigator: &mut dyn Navigator) {
        navigator.navigate(path);
        layout.after_navigation();
    }

    /// The drawer's own close button only appears on overlays.
    pub fn show_close_button(variant: DrawerVariant) -> bool {
        variant == DrawerVariant::Overlay
    }

    /// Footer text, e.g. "NovaBank v1.0.0".
    pub fn version_label() -> String {
        format!("{} v{}", BRAND_NAME, env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborator::MemoryRouter;
    use crate::config::LayoutConfig;

    /// Records every path it is asked to navigate to.
    struct RecordingNavigator {
        path: String,
        seen: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn current_path(&self) -> &str {
            &self.path
        }

        fn navigate(&mut self, path: &str) {
            self.seen.push(path.to_string());
            self.path = path.to_string();
        }
    }

    #[test]
    fn test_items_mark_single_selection() {
        let catalog = NavigationCatalog::banking();
        let items = ShellNavigation::items(&catalog, Role::User, "/transfer");
        assert_eq!(items.len(), 6);

        let selected: Vec<_> = items.iter().filter(|item| item.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].title, "Transfer");
    }

    #[test]
    fn test_items_unknown_path_selects_nothing() {
        let catalog = NavigationCatalog::banking();
        let items = ShellNavigation::items(&catalog, Role::Admin, "/nowhere");
        assert_eq!(items.len(), 7);
        assert!(items.iter().all(|item| !item.selected));
    }

    #[test]
    fn test_hidden_admin_path_selects_nothing() {
        let catalog = NavigationCatalog::banking();
        let items = ShellNavigation::items(&catalog, Role::User, "/admin");
        assert!(items.iter().all(|item| item.path != "/admin" && !item.selected));
    }

    #[test]
    fn test_activate_closes_overlay_after_navigating() {
        let mut layout = ResponsiveLayoutController::new(480.0, &LayoutConfig::default());
        layout.open();
        let mut navigator = RecordingNavigator {
            path: "/".to_string(),
            seen: Vec::new(),
        };

        ShellNavigation::activate("/accounts", &mut layout, &mut navigator);
        assert_eq!(navigator.seen, ["/accounts"]);
        assert!(!layout.is_open());
    }

    #[test]
    fn test_activate_keeps_pinned_drawer() {
        let mut layout = ResponsiveLayoutController::new(1280.0, &LayoutConfig::default());
        let mut router = MemoryRouter::default();

        ShellNavigation::activate("/settings", &mut layout, &mut router);
        assert_eq!(router.current_path(), "/settings");
        assert!(layout.is_open());
    }

    #[test]
    fn test_brand() {
        assert!(ShellNavigation::version_label().starts_with("NovaBank v"));
        assert!(ShellNavigation::show_close_button(DrawerVariant::Overlay));
        assert!(!ShellNavigation::show_close_button(DrawerVariant::Pinned));
    }
}
