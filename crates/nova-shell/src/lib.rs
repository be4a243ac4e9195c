//! NovaBank shell state.
//!
//! This crate holds the toolkit-independent part of the NovaBank dashboard
//! shell: the persistent header/navigation/content frame that wraps every
//! page. It knows nothing about widgets; the GUI crate renders whatever the
//! types here describe.
//!
//! # Features
//!
//! - **Theme preference** persisted through a key-value store
//! - **Role-gated navigation** over a fixed, ordered catalog
//! - **Responsive drawer** that switches between overlay and pinned variants
//! - **Composition root** that routes header, drawer and resize events
//!
//! # Example
//!
//! ```
//! use nova_shell::{MemoryRouter, MemoryStore, ShellConfig, ShellEvent, ShellFrame};
//!
//! let mut router = MemoryRouter::new("/");
//! let mut frame = ShellFrame::builder(ShellConfig::default(), MemoryStore::new())
//!     .viewport_width(1280.0)
//!     .build();
//!
//! frame.handle(ShellEvent::NavigateTo("/transfer".into()), &mut router, None);
//! assert_eq!(router.history(), ["/", "/transfer"]);
//! assert!(frame.layout().drawer.is_open);
//! ```
//!
//! # Architecture
//!
//! - `role` - user identity and role
//! - `storage/` - durable key-value storage (memory and TOML file backed)
//! - `theme` - light/dark preference with write-through persistence
//! - `navigation/` - navigation catalog, role filtering and selection
//! - `layout` - drawer open state and presentation variant
//! - `header` - header bar state and actions
//! - `sidebar` - drawer entry view models and activation
//! - `collaborator` - router and notification seams
//! - `frame` - composition root
//! - `config` - TOML configuration
//! - `error` - error types

mod collaborator;
mod config;
mod error;
mod frame;
mod header;
mod layout;
mod navigation;
mod role;
mod sidebar;
mod storage;
mod theme;

pub use collaborator::{LogoutHandler, MemoryRouter, Navigator, Notifier, Severity};
pub use config::{LayoutConfig, ShellConfig, StorageConfig, WindowConfig};
pub use error::{Result, ShellError, StorageError};
pub use frame::{FrameLayout, ShellEvent, ShellFrame, ShellFrameBuilder};
pub use header::{HeaderAction, HeaderEffect, NOTIFICATION_COUNT, ShellHeader};
pub use layout::{Breakpoints, DrawerState, DrawerVariant, ResponsiveLayoutController, ViewportClass};
pub use navigation::{IconId, NavigationCatalog, NavigationEntry, find_selected};
pub use role::{CurrentUser, Role};
pub use sidebar::{BRAND_MARK, BRAND_NAME, NavItemView, ShellNavigation};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use theme::{THEME_MODE_KEY, ThemeMode, ThemeModeStore};
