//! Shell color extension trait.
//!
//! Colors the shell chrome needs beyond Iced's `ExtendedPalette`: paper
//! surfaces, dividers, row states and the drawer scrim.
//!
//! ```rust,ignore
//! use crate::theme::ShellColors;
//!
//! container(content).style(|theme: &Theme| container::Style {
//!     background: Some(theme.shell().paper.into()),
//!     ..Default::default()
//! })
//! ```

use iced::{Color, Theme};

/// Shell-specific colors not covered by Iced's ExtendedPalette.
#[derive(Debug, Clone, Copy)]
pub struct ShellColorSet {
    /// Header, drawer, cards and menus
    pub paper: Color,
    pub divider: Color,
    pub text_secondary: Color,
    /// Brand accent (avatar, brand mark)
    pub secondary: Color,
    pub info: Color,
    /// Positive money movement
    pub positive: Color,
    pub row_hover: Color,
    pub row_selected: Color,
    /// Backdrop behind an overlay drawer
    pub scrim: Color,
    pub shadow: Color,
}

pub trait ShellColors {
    fn shell(&self) -> ShellColorSet;
}

impl ShellColors for Theme {
    fn shell(&self) -> ShellColorSet {
        let palette = self.extended_palette();
        let primary = palette.primary.base.color;

        if palette.is_dark {
            ShellColorSet {
                paper: Color::from_rgb8(0x0F, 0x29, 0x42),
                divider: Color::from_rgba(1.0, 1.0, 1.0, 0.12),
                text_secondary: Color::from_rgba(1.0, 1.0, 1.0, 0.7),
                secondary: Color::from_rgb8(0x4D, 0xB6, 0xAC),
                info: Color::from_rgb8(0x29, 0xB6, 0xF6),
                positive: Color::from_rgb8(0x4C, 0xAF, 0x50),
                row_hover: Color::from_rgba(1.0, 1.0, 1.0, 0.08),
                row_selected: with_alpha(primary, 0.16),
                scrim: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
                shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            }
        } else {
            ShellColorSet {
                paper: Color::WHITE,
                divider: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
                text_secondary: Color::from_rgba(0.0, 0.0, 0.0, 0.6),
                secondary: Color::from_rgb8(0x00, 0x89, 0x7B),
                info: Color::from_rgb8(0x02, 0x88, 0xD1),
                positive: Color::from_rgb8(0x4C, 0xAF, 0x50),
                row_hover: Color::from_rgba(0.0, 0.0, 0.0, 0.04),
                row_selected: with_alpha(primary, 0.08),
                scrim: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
                shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
            }
        }
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::nova_theme;

    #[test]
    fn test_paper_differs_by_mode() {
        assert_eq!(nova_theme(false).shell().paper, Color::WHITE);
        assert_ne!(nova_theme(true).shell().paper, Color::WHITE);
    }

    #[test]
    fn test_selected_row_is_tinted_primary() {
        let theme = nova_theme(false);
        let selected = theme.shell().row_selected;
        let primary = theme.extended_palette().primary.base.color;
        assert_eq!((selected.r, selected.g, selected.b), (primary.r, primary.g, primary.b));
        assert!(selected.a < 1.0);
    }
}
