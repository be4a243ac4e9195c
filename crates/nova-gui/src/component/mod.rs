//! Reusable shell widgets.
//!
//! - `header` - header bar, account dropdown
//! - `drawer` - navigation drawer
//! - `toast` - toast stack
//! - `icon` - Lucide glyph lookup

pub mod drawer;
pub mod header;
pub mod icon;
pub mod toast;

pub use drawer::view_drawer;
pub use header::{view_account_menu, view_header};
pub use icon::{LUCIDE_FONT_BYTES, nav_icon, severity_icon};
pub use toast::view_toasts;
