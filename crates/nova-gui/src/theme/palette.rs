//! NovaBank light and dark palettes.

use iced::theme::Palette;
use iced::{Color, Theme};

/// Builds the NovaBank theme for the given mode.
pub fn nova_theme(is_dark: bool) -> Theme {
    if is_dark {
        Theme::custom("NovaBank Dark".to_string(), dark())
    } else {
        Theme::custom("NovaBank Light".to_string(), light())
    }
}

fn light() -> Palette {
    Palette {
        background: Color::from_rgb8(0xF5, 0xF7, 0xFA),
        text: Color::from_rgba(0.0, 0.0, 0.0, 0.87),
        primary: Color::from_rgb8(0x19, 0x76, 0xD2),
        success: Color::from_rgb8(0x38, 0x8E, 0x3C),
        warning: Color::from_rgb8(0xF5, 0x7C, 0x00),
        danger: Color::from_rgb8(0xD3, 0x2F, 0x2F),
    }
}

fn dark() -> Palette {
    Palette {
        background: Color::from_rgb8(0x0A, 0x19, 0x29),
        text: Color::WHITE,
        primary: Color::from_rgb8(0x42, 0xA5, 0xF5),
        success: Color::from_rgb8(0x66, 0xBB, 0x6A),
        warning: Color::from_rgb8(0xFF, 0xB7, 0x4D),
        danger: Color::from_rgb8(0xEF, 0x53, 0x50),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_follows_mode() {
        assert!(!nova_theme(false).extended_palette().is_dark);
        assert!(nova_theme(true).extended_palette().is_dark);
    }

    #[test]
    fn test_primary_colors() {
        assert_eq!(light().primary, Color::from_rgb8(25, 118, 210));
        assert_eq!(dark().primary, Color::from_rgb8(66, 165, 245));
    }
}
