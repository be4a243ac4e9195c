//! Shell composition root.
//!
//! `ShellFrame` owns every piece of shell state and is the single place
//! events are applied. Collaborators (router, toasts) are lent per call, so
//! the frame never holds on to them.

use crate::collaborator::{LogoutHandler, Navigator, Notifier, Severity};
use crate::config::ShellConfig;
use crate::header::{HeaderAction, HeaderEffect, ShellHeader};
use crate::layout::{DrawerState, ResponsiveLayoutController, ViewportClass};
use crate::navigation::NavigationCatalog;
use crate::role::CurrentUser;
use crate::sidebar::{NavItemView, ShellNavigation};
use crate::storage::KeyValueStore;
use crate::theme::ThemeModeStore;

/// Input to the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    /// Viewport width changed (logical pixels).
    Resized(f32),
    ToggleDrawer,
    /// Scrim click or the drawer's own close button.
    CloseDrawer,
    /// A drawer entry was activated. Catalog entries hidden from the
    /// current role are refused; paths outside the catalog pass through.
    NavigateTo(String),
    Header(HeaderAction),
}

/// Geometry the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLayout {
    pub drawer: DrawerState,
    /// Left inset of the content region.
    pub content_offset: f32,
    pub drawer_width: f32,
    pub show_scrim: bool,
}

pub struct ShellFrame<S> {
    config: ShellConfig,
    catalog: NavigationCatalog,
    user: CurrentUser,
    layout: ResponsiveLayoutController,
    header: ShellHeader,
    theme: ThemeModeStore<S>,
    on_logout: Option<LogoutHandler>,
}

impl<S: KeyValueStore> ShellFrame<S> {
    pub fn builder(config: ShellConfig, store: S) -> ShellFrameBuilder<S> {
        ShellFrameBuilder {
            config,
            store,
            user: None,
            catalog: None,
            viewport_width: None,
            on_logout: None,
        }
    }

    /// Apply one event.
    ///
    /// Runs to completion; any navigation or notification it causes has
    /// been issued by the time it returns.
    pub fn handle(
        &mut self,
        event: ShellEvent,
        navigator: &mut dyn Navigator,
        notifier: Option<&mut dyn Notifier>,
    ) {
        match event {
            ShellEvent::Resized(width) => {
                self.layout.resize(width);
            }
            ShellEvent::ToggleDrawer => self.layout.toggle(),
            ShellEvent::CloseDrawer => self.layout.close(),
            ShellEvent::NavigateTo(path) => {
                if !self.may_visit(&path) {
                    tracing::warn!("{} may not open {}", self.user.role, path);
                    return;
                }
                ShellNavigation::activate(&path, &mut self.layout, navigator);
            }
            ShellEvent::Header(action) => {
                let effect = self.header.handle(action);
                self.apply_header_effect(effect, navigator, notifier);
            }
        }
    }

    fn may_visit(&self, path: &str) -> bool {
        self.catalog
            .entry_by_path(path)
            .is_none_or(|entry| entry.is_visible_to(self.user.role))
    }

    fn apply_header_effect(
        &mut self,
        effect: HeaderEffect,
        navigator: &mut dyn Navigator,
        notifier: Option<&mut dyn Notifier>,
    ) {
        match effect {
            HeaderEffect::None => {}
            HeaderEffect::ToggleDrawer => self.layout.toggle(),
            HeaderEffect::ToggleTheme => {
                let is_dark = self.theme.toggle_mode();
                tracing::info!("Theme switched to {}", self.theme.mode());
                if let Some(notifier) = notifier {
                    let message = if is_dark {
                        "Dark mode enabled"
                    } else {
                        "Light mode enabled"
                    };
                    notifier.notify(message, Severity::Info);
                }
            }
            HeaderEffect::Navigate(path) => navigator.navigate(&path),
            HeaderEffect::Logout => match self.on_logout.as_mut() {
                Some(handler) => {
                    tracing::info!("Logging out {}", self.user.name);
                    handler();
                }
                None => tracing::debug!("Logout requested with no handler attached"),
            },
        }
    }

    /// Content inset: the drawer width while a pinned drawer is open.
    pub fn content_offset(&self) -> f32 {
        self.layout.content_offset(self.config.layout.drawer_width)
    }

    pub fn layout(&self) -> FrameLayout {
        FrameLayout {
            drawer: self.layout.state(),
            content_offset: self.content_offset(),
            drawer_width: self.config.layout.drawer_width,
            show_scrim: self.layout.show_scrim(),
        }
    }

    pub fn nav_items(&self, current_path: &str) -> Vec<NavItemView> {
        ShellNavigation::items(&self.catalog, self.user.role, current_path)
    }

    pub fn viewport(&self) -> ViewportClass {
        self.layout.viewport()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }

    /// Replace the identity, e.g. after the session collaborator signs in.
    pub fn set_user(&mut self, user: CurrentUser) {
        self.user = user;
    }

    pub fn header(&self) -> &ShellHeader {
        &self.header
    }

    pub fn catalog(&self) -> &NavigationCatalog {
        &self.catalog
    }
}

/// Builder for [`ShellFrame`].
pub struct ShellFrameBuilder<S> {
    config: ShellConfig,
    store: S,
    user: Option<CurrentUser>,
    catalog: Option<NavigationCatalog>,
    viewport_width: Option<f32>,
    on_logout: Option<LogoutHandler>,
}

impl<S: KeyValueStore> ShellFrameBuilder<S> {
    /// Defaults to the configured user.
    pub fn user(mut self, user: CurrentUser) -> Self {
        self.user = Some(user);
        self
    }

    /// Defaults to [`NavigationCatalog::banking`].
    pub fn catalog(mut self, catalog: NavigationCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Width at mount. Defaults to the configured window width.
    pub fn viewport_width(mut self, width: f32) -> Self {
        self.viewport_width = Some(width);
        self
    }

    pub fn on_logout(mut self, handler: impl FnMut() + Send + 'static) -> Self {
        self.on_logout = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> ShellFrame<S> {
        let width = self.viewport_width.unwrap_or(self.config.window.width);
        let layout = ResponsiveLayoutController::new(width, &self.config.layout);
        let theme = ThemeModeStore::open_with_key(self.store, self.config.storage.theme_key.clone());
        let user = self.user.unwrap_or_else(|| self.config.user.clone());

        tracing::info!(
            "Shell mounted for {} ({}) at {}px, {:?}",
            user.name,
            user.role,
            width,
            layout.viewport()
        );

        ShellFrame {
            catalog: self.catalog.unwrap_or_else(NavigationCatalog::banking),
            user,
            layout,
            header: ShellHeader::new(),
            theme,
            on_logout: self.on_logout,
            config: self.config,
        }
    }
}
