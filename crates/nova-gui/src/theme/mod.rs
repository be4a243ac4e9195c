//! Theme module for NovaBank.
//!
//! - `palette` - light/dark palettes and theme creation
//! - `colors` - `ShellColors` extension trait for chrome colors
//! - `spacing` - spacing and size constants
//! - `style` - shared widget style functions

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod style;

pub use colors::{ShellColorSet, ShellColors};
pub use palette::nova_theme;
pub use spacing::{
    AVATAR_SIZE, BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM,
    HEADER_HEIGHT, ICON_SIZE_MD, MENU_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
    TOAST_WIDTH,
};
pub use style::{button_icon, button_menu_item, card, divider, paper_bar};
