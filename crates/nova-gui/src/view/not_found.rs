//! Page shown for paths with no route.

use iced::widget::{button, column, text};
use iced::{Alignment, Element, Theme};
use iced_fonts::lucide;
use nova_shell::ShellEvent;

use crate::message::Message;
use crate::theme::{SPACING_MD, ShellColors};

pub fn view_not_found(path: &str) -> Element<'_, Message> {
    column![
        lucide::search_x().size(48),
        text("Page not found").size(28),
        text(format!("Nothing lives at {path}."))
            .size(14)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.shell().text_secondary),
            }),
        button(text("Back to Dashboard").size(14))
            .on_press(Message::Shell(ShellEvent::NavigateTo("/".to_string())))
            .padding([8.0, SPACING_MD]),
    ]
    .spacing(SPACING_MD)
    .align_x(Alignment::Center)
    .into()
}
