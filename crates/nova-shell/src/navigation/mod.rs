//! Navigation catalog and selection.
//!
//! - `entry` - one navigation entry
//! - `catalog` - the ordered, validated registry and role filtering

mod catalog;
mod entry;

pub use catalog::{NavigationCatalog, find_selected};
pub use entry::{IconId, NavigationEntry};
