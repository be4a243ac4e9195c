//! Toast notification component.
//!
//! Toasts stack in the top-right corner, oldest on top.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;
use nova_shell::Severity;

use super::icon::severity_icon;
use crate::message::{Message, ToastMessage};
use crate::state::{Toast, ToastQueue};
use crate::theme::{
    BORDER_RADIUS_MD, HEADER_HEIGHT, SPACING_MD, SPACING_SM, SPACING_XS, ShellColors,
    TOAST_WIDTH, button_icon, card,
};

fn severity_color(theme: &Theme, severity: Severity) -> iced::Color {
    let palette = theme.extended_palette();
    match severity {
        Severity::Success => palette.success.base.color,
        Severity::Info => theme.shell().info,
        Severity::Warning => palette.warning.base.color,
        Severity::Error => palette.danger.base.color,
    }
}

/// Renders the visible toasts as a top-right column.
pub fn view_toasts(queue: &ToastQueue) -> Element<'_, Message> {
    let toasts = queue
        .visible()
        .fold(column![].spacing(SPACING_SM), |column, toast| {
            column.push(view_toast(toast))
        });

    container(row![Space::new().width(Length::Fill), toasts])
        .width(Length::Fill)
        .padding([HEADER_HEIGHT + SPACING_SM, SPACING_MD])
        .into()
}

fn view_toast(toast: &Toast) -> Element<'_, Message> {
    let severity = toast.severity;

    let icon = severity_icon(severity)
        .size(18)
        .style(move |theme: &Theme| text::Style {
            color: Some(severity_color(theme, severity)),
        });

    let dismiss = button(lucide::x().size(14))
        .on_press(Message::Toast(ToastMessage::Dismiss(toast.id)))
        .padding(SPACING_XS)
        .style(button_icon);

    container(
        row![icon, text(&toast.message).size(14).width(Length::Fill), dismiss]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .width(Length::Fixed(TOAST_WIDTH))
    .padding([SPACING_SM, SPACING_MD])
    .style(move |theme: &Theme| {
        let base = card(theme);
        container::Style {
            border: Border {
                color: severity_color(theme, severity),
                width: 1.0,
                radius: BORDER_RADIUS_MD.into(),
            },
            ..base
        }
    })
    .into()
}
