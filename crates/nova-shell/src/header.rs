//! Header bar state.
//!
//! The only state the header owns is whether the account menu is open.
//! Everything else it shows is derived from the user, the viewport and the
//! theme flag at render time.

use crate::layout::ViewportClass;
use crate::role::Role;

/// Unread notification count shown on the bell.
pub const NOTIFICATION_COUNT: u32 = 3;

const PROFILE_PATH: &str = "/profile";
const SETTINGS_PATH: &str = "/settings";

/// User interaction with the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    /// Compact-only hamburger button.
    ToggleMenu,
    ToggleTheme,
    OpenAccountMenu,
    /// Dismissed by clicking outside the menu.
    CloseAccountMenu,
    Profile,
    Settings,
    Logout,
}

/// What the frame has to do in response to a header action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderEffect {
    None,
    ToggleDrawer,
    ToggleTheme,
    Navigate(String),
    Logout,
}

#[derive(Debug, Clone, Default)]
pub struct ShellHeader {
    account_menu_open: bool,
}

impl ShellHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_menu_open(&self) -> bool {
        self.account_menu_open
    }

    /// Update local state and report the effect for the frame to apply.
    ///
    /// Every menu item closes the menu before its effect runs.
    pub fn handle(&mut self, action: HeaderAction) -> HeaderEffect {
        match action {
            HeaderAction::ToggleMenu => HeaderEffect::ToggleDrawer,
            HeaderAction::ToggleTheme => HeaderEffect::ToggleTheme,
            HeaderAction::OpenAccountMenu => {
                self.account_menu_open = true;
                HeaderEffect::None
            }
            HeaderAction::CloseAccountMenu => {
                self.account_menu_open = false;
                HeaderEffect::None
            }
            HeaderAction::Profile => {
                self.account_menu_open = false;
                HeaderEffect::Navigate(PROFILE_PATH.to_string())
            }
            HeaderAction::Settings => {
                self.account_menu_open = false;
                HeaderEffect::Navigate(SETTINGS_PATH.to_string())
            }
            HeaderAction::Logout => {
                self.account_menu_open = false;
                HeaderEffect::Logout
            }
        }
    }

    /// Avatar initials: first letter of each word, upper-cased, at most two.
    pub fn initials(name: &str) -> String {
        name.split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    /// Wide viewports get the full greeting, compact ones just the name.
    pub fn greeting(name: &str, viewport: ViewportClass) -> String {
        match viewport {
            ViewportClass::Wide => format!("Welcome back, {name}"),
            ViewportClass::Compact => name.to_string(),
        }
    }

    pub fn role_caption(role: Role) -> Option<&'static str> {
        match role {
            Role::Admin => Some(Role::Admin.label()),
            Role::User => None,
        }
    }

    pub fn show_menu_button(viewport: ViewportClass) -> bool {
        viewport.is_compact()
    }

    pub fn theme_toggle_hint(is_dark: bool) -> &'static str {
        if is_dark {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    }
}
