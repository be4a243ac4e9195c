//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - icon margins, list item gaps
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - page padding, card gaps
pub const SPACING_LG: f32 = 24.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Cards and drawer rows
pub const BORDER_RADIUS_MD: f32 = 8.0;

pub const BORDER_RADIUS_LG: f32 = 12.0;

/// Avatars and badges
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Header bar height
pub const HEADER_HEIGHT: f32 = 64.0;

/// Icon size inside header buttons and drawer rows
pub const ICON_SIZE_MD: f32 = 20.0;

/// Avatar diameter
pub const AVATAR_SIZE: f32 = 36.0;

/// Account dropdown width
pub const MENU_WIDTH: f32 = 220.0;

/// Toast width
pub const TOAST_WIDTH: f32 = 340.0;
