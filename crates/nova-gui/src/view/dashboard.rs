//! Dashboard placeholder page.

use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, ShellColors, card};

/// Renders the dashboard with static balance tiles.
pub fn view_dashboard<'a>() -> Element<'a, Message> {
    let total = column![
        caption("Total Balance"),
        text("$12,345.67").size(32),
        row![
            lucide::trending_up().size(18).style(positive),
            text("+5.2% from last month").size(13).style(positive),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    ]
    .spacing(SPACING_SM);

    let tiles = row![
        tile(total.into()),
        tile(column![caption("Checking Account"), text("$8,234.56").size(26)].spacing(SPACING_SM).into()),
        tile(column![caption("Savings Account"), text("$4,111.11").size(26)].spacing(SPACING_SM).into()),
    ]
    .spacing(SPACING_LG);

    column![text("Dashboard").size(28), tiles]
        .spacing(SPACING_LG)
        .into()
}

fn tile(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::FillPortion(1))
        .padding(SPACING_MD)
        .style(card)
        .into()
}

fn caption<'a>(label: &'a str) -> Element<'a, Message> {
    text(label)
        .size(13)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.shell().text_secondary),
        })
        .into()
}

fn positive(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.shell().positive),
    }
}
