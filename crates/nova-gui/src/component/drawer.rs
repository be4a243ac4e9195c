//! Navigation drawer component.
//!
//! A fixed-width panel with the brand block, the role-filtered entries and a
//! version footer. Rows come from the shell already filtered and with the
//! selection resolved; this module only draws them.

use iced::widget::{button, column, container, row, rule, scrollable, space, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;
use nova_shell::{BRAND_MARK, BRAND_NAME, DrawerVariant, NavItemView, ShellEvent, ShellNavigation};

use super::header::count_badge;
use super::icon::nav_icon;
use crate::message::Message;
use crate::theme::{
    BORDER_RADIUS_MD, HEADER_HEIGHT, ICON_SIZE_MD, SPACING_MD, SPACING_SM, SPACING_XS,
    ShellColors, button_icon, divider, paper_bar,
};

/// Renders the drawer panel.
pub fn view_drawer<'a>(
    items: Vec<NavItemView>,
    variant: DrawerVariant,
    width: f32,
) -> Element<'a, Message> {
    let mut entries = column![].spacing(SPACING_XS);
    for item in items {
        let divider_after = item.divider_after;
        entries = entries.push(view_item(item));
        if divider_after {
            entries = entries.push(
                container(rule::horizontal(1).style(divider)).padding([SPACING_SM, 0.0]),
            );
        }
    }

    let footer = container(
        text(ShellNavigation::version_label())
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.shell().text_secondary),
            }),
    )
    .width(Length::Fill)
    .padding(SPACING_MD)
    .center_x(Length::Fill);

    container(column![
        view_brand(variant),
        rule::horizontal(1).style(divider),
        scrollable(container(entries).padding(SPACING_SM)).height(Length::Fill),
        rule::horizontal(1).style(divider),
        footer,
    ])
    .width(Length::Fixed(width))
    .height(Length::Fill)
    .style(paper_bar)
    .into()
}

/// Brand mark and name, plus the close chevron on overlays.
fn view_brand<'a>(variant: DrawerVariant) -> Element<'a, Message> {
    let mark = container(text(BRAND_MARK).size(16))
        .center_x(Length::Fixed(40.0))
        .center_y(Length::Fixed(40.0))
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.primary.base.color.into()),
                text_color: Some(palette.primary.base.text),
                border: Border {
                    radius: BORDER_RADIUS_MD.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        });

    let mut brand = row![
        mark,
        text(BRAND_NAME).size(20).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().primary.base.color),
        }),
        space::horizontal(),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    if ShellNavigation::show_close_button(variant) {
        brand = brand.push(
            button(lucide::chevron_left().size(ICON_SIZE_MD))
                .on_press(Message::Shell(ShellEvent::CloseDrawer))
                .padding(SPACING_XS)
                .style(button_icon),
        );
    }

    container(brand)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, SPACING_MD])
        .align_y(Alignment::Center)
        .into()
}

fn view_item<'a>(item: NavItemView) -> Element<'a, Message> {
    let selected = item.selected;

    let mut content = row![nav_icon(&item.icon).size(ICON_SIZE_MD), text(item.title).size(14)]
        .spacing(SPACING_MD)
        .align_y(Alignment::Center);

    if let Some(badge) = item.badge {
        content = content.push(space::horizontal()).push(count_badge(badge));
    }

    button(content)
        .on_press(Message::Shell(ShellEvent::NavigateTo(item.path)))
        .width(Length::Fill)
        .padding([SPACING_SM + 2.0, SPACING_MD])
        .style(move |theme: &Theme, status| {
            let palette = theme.extended_palette();
            let shell = theme.shell();

            let (background, text_color) = if selected {
                (Some(shell.row_selected.into()), palette.primary.base.color)
            } else {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        Some(shell.row_hover.into())
                    }
                    button::Status::Active | button::Status::Disabled => None,
                };
                (background, palette.background.base.text)
            };

            button::Style {
                background,
                text_color,
                border: Border {
                    radius: BORDER_RADIUS_MD.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}
