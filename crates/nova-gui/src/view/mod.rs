//! Views for NovaBank.
//!
//! - `shell` - frame composition (header, drawer, content, overlays)
//! - `dashboard` - dashboard placeholder page
//! - `not_found` - unknown path page

pub mod dashboard;
pub mod not_found;
pub mod shell;

pub use dashboard::view_dashboard;
pub use not_found::view_not_found;
pub use shell::view_shell;
