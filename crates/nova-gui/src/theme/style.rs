//! Shared widget styles.
//!
//! Style functions receive `&Theme` and resolve colors inside, so the same
//! widget tree renders correctly in both modes.

use iced::widget::{button, container, rule};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::colors::ShellColors;
use super::spacing::{BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_SM};

/// Round icon button in the header and drawer.
pub fn button_icon(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let shell = theme.shell();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(shell.row_hover.into()),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

/// Row inside the account dropdown.
pub fn button_menu_item(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let shell = theme.shell();

    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => Some(shell.row_hover.into()),
            button::Status::Active | button::Status::Disabled => None,
        },
        text_color: palette.background.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Header bar and drawer surface.
pub fn paper_bar(theme: &Theme) -> container::Style {
    let shell = theme.shell();
    container::Style {
        background: Some(shell.paper.into()),
        text_color: Some(theme.extended_palette().background.base.text),
        shadow: Shadow {
            color: shell.shadow,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Elevated card (dashboard tiles, menus, toasts).
pub fn card(theme: &Theme) -> container::Style {
    let shell = theme.shell();
    container::Style {
        background: Some(shell.paper.into()),
        text_color: Some(theme.extended_palette().background.base.text),
        border: Border {
            color: shell.divider,
            width: 1.0,
            radius: BORDER_RADIUS_LG.into(),
        },
        shadow: Shadow {
            color: shell.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Thin horizontal divider.
pub fn divider(theme: &Theme) -> rule::Style {
    rule::Style {
        color: theme.shell().divider,
        radius: 0.0.into(),
        fill_mode: rule::FillMode::Full,
        snap: true,
    }
}
