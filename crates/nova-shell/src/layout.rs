//! Responsive drawer layout.
//!
//! The drawer has two independent pieces of state:
//!
//! - `is_open` - changed only by explicit toggle/close/open calls and by
//!   the automatic close after navigating in overlay mode
//! - the viewport class - derived from the latest observed width
//!
//! The presentation variant is recomputed from the viewport class on every
//! read; it is never stored.
//!
//! ```text
//!               resize(<md)            resize(>=md)
//!   Wide  ───────────────────► Compact ────────────► Wide
//!   variant = configured        variant = Overlay      variant = configured
//!
//!   toggle(): is_open = !is_open   (any viewport)
//!   close():  is_open = false
//!   navigation while Overlay: close() after the navigation is issued
//! ```
//!
//! Growing the viewport back to wide never forces the drawer open.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;

// =============================================================================
// BREAKPOINTS
// =============================================================================

/// Width breakpoints in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Compact/wide threshold: anything narrower is compact.
    pub md: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self { md: 900.0 }
    }
}

impl Breakpoints {
    pub fn classify(&self, width: f32) -> ViewportClass {
        if width < self.md {
            ViewportClass::Compact
        } else {
            ViewportClass::Wide
        }
    }
}

/// Viewport size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    /// Phone-sized; the drawer floats over the content.
    Compact,
    /// Desktop-sized; the drawer uses the configured wide variant.
    Wide,
}

impl ViewportClass {
    pub fn is_compact(&self) -> bool {
        matches!(self, Self::Compact)
    }
}

/// How the drawer is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerVariant {
    /// Temporary panel above a scrim; reserves no space.
    Overlay,
    /// Reserves horizontal space beside the content.
    #[default]
    Pinned,
}

/// Snapshot of the drawer for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerState {
    pub is_open: bool,
    pub variant: DrawerVariant,
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Owns the drawer open state and derives its presentation variant.
#[derive(Debug, Clone)]
pub struct ResponsiveLayoutController {
    breakpoints: Breakpoints,
    wide_variant: DrawerVariant,
    width: f32,
    is_open: bool,
}

impl ResponsiveLayoutController {
    /// Mount the controller: open on wide viewports, closed on compact ones.
    pub fn new(initial_width: f32, config: &LayoutConfig) -> Self {
        let is_open = !config.breakpoints.classify(initial_width).is_compact();
        Self {
            breakpoints: config.breakpoints,
            wide_variant: config.wide_variant,
            width: initial_width,
            is_open,
        }
    }

    /// Record a new viewport width.
    ///
    /// Returns the new class when the compact/wide boundary was crossed.
    /// `is_open` is left as it is.
    pub fn resize(&mut self, width: f32) -> Option<ViewportClass> {
        let before = self.viewport();
        self.width = width;
        let after = self.viewport();

        if before == after {
            return None;
        }

        tracing::debug!(
            "Viewport crossed into {:?} at {}px; drawer variant is now {:?}",
            after,
            width,
            self.variant()
        );
        Some(after)
    }

    pub fn viewport(&self) -> ViewportClass {
        self.breakpoints.classify(self.width)
    }

    pub fn variant(&self) -> DrawerVariant {
        match self.viewport() {
            ViewportClass::Compact => DrawerVariant::Overlay,
            ViewportClass::Wide => self.wide_variant,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Apply the post-navigation rule: overlay drawers close, pinned ones
    /// stay as they are. Returns whether the drawer was closed.
    pub fn after_navigation(&mut self) -> bool {
        match self.variant() {
            DrawerVariant::Overlay => {
                let was_open = self.is_open;
                self.close();
                was_open
            }
            DrawerVariant::Pinned => false,
        }
    }

    pub fn state(&self) -> DrawerState {
        DrawerState {
            is_open: self.is_open,
            variant: self.variant(),
        }
    }

    /// Horizontal space the content must leave for the drawer.
    pub fn content_offset(&self, drawer_width: f32) -> f32 {
        match self.state() {
            DrawerState {
                is_open: true,
                variant: DrawerVariant::Pinned,
            } => drawer_width,
            _ => 0.0,
        }
    }

    /// The scrim is drawn while an overlay drawer is open.
    pub fn show_scrim(&self) -> bool {
        self.is_open && self.variant() == DrawerVariant::Overlay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: f32 = 1280.0;
    const COMPACT: f32 = 480.0;

    fn controller(width: f32) -> ResponsiveLayoutController {
        ResponsiveLayoutController::new(width, &LayoutConfig::default())
    }

    #[test]
    fn test_breakpoint_boundary() {
        let breakpoints = Breakpoints::default();
        assert_eq!(breakpoints.classify(899.9), ViewportClass::Compact);
        assert_eq!(breakpoints.classify(900.0), ViewportClass::Wide);
        assert_eq!(breakpoints.classify(0.0), ViewportClass::Compact);
    }

    #[test]
    fn test_initial_state_follows_viewport() {
        let wide = controller(WIDE);
        assert!(wide.is_open());
        assert_eq!(wide.variant(), DrawerVariant::Pinned);

        let compact = controller(COMPACT);
        assert!(!compact.is_open());
        assert_eq!(compact.variant(), DrawerVariant::Overlay);
    }

    #[test]
    fn test_toggle_and_close() {
        let mut layout = controller(COMPACT);
        layout.toggle();
        assert!(layout.is_open());
        layout.toggle();
        assert!(!layout.is_open());
        layout.open();
        layout.close();
        assert!(!layout.is_open());
    }

    #[test]
    fn test_variant_tracks_viewport_regardless_of_open_state() {
        let mut layout = controller(WIDE);
        assert_eq!(layout.resize(600.0), Some(ViewportClass::Compact));
        assert_eq!(layout.variant(), DrawerVariant::Overlay);
        assert!(layout.is_open());

        assert_eq!(layout.resize(700.0), None);
        assert_eq!(layout.resize(1000.0), Some(ViewportClass::Wide));
        assert_eq!(layout.variant(), DrawerVariant::Pinned);
    }

    #[test]
    fn test_growing_viewport_does_not_reopen() {
        let mut layout = controller(COMPACT);
        layout.toggle();
        layout.close();
        layout.resize(WIDE);
        assert!(!layout.is_open());
        assert_eq!(layout.content_offset(280.0), 0.0);
    }

    #[test]
    fn test_navigation_closes_overlay_only() {
        let mut compact = controller(COMPACT);
        compact.open();
        assert!(compact.after_navigation());
        assert!(!compact.is_open());
        assert!(!compact.after_navigation());

        let mut wide = controller(WIDE);
        assert!(!wide.after_navigation());
        assert!(wide.is_open());
    }

    #[test]
    fn test_configured_wide_variant() {
        let config = LayoutConfig {
            wide_variant: DrawerVariant::Overlay,
            ..LayoutConfig::default()
        };
        let mut layout = ResponsiveLayoutController::new(WIDE, &config);
        assert_eq!(layout.variant(), DrawerVariant::Overlay);
        assert!(layout.after_navigation());
        assert_eq!(layout.content_offset(280.0), 0.0);
    }

    #[test]
    fn test_content_offset_and_scrim() {
        let mut layout = controller(WIDE);
        assert_eq!(layout.content_offset(280.0), 280.0);
        assert!(!layout.show_scrim());

        layout.toggle();
        assert_eq!(layout.content_offset(280.0), 0.0);

        layout.resize(COMPACT);
        layout.open();
        assert_eq!(layout.content_offset(280.0), 0.0);
        assert!(layout.show_scrim());
    }
}
