//! Header bar component.
//!
//! Layout, left to right: menu button (compact only), greeting with the
//! admin caption, then the theme toggle, notification bell and avatar.
//! The account dropdown is a separate layer so it can float over the page.

use iced::widget::{
    Space, button, column, container, mouse_area, row, rule, space, stack, text, tooltip,
};
use iced::{Alignment, Border, Element, Length, Padding, Theme};
use iced_fonts::lucide;
use nova_shell::{CurrentUser, HeaderAction, NOTIFICATION_COUNT, ShellEvent, ShellHeader, ViewportClass};

use crate::message::Message;
use crate::theme::{
    AVATAR_SIZE, BORDER_RADIUS_FULL, BORDER_RADIUS_MD, HEADER_HEIGHT, ICON_SIZE_MD, MENU_WIDTH,
    SPACING_MD, SPACING_SM, SPACING_XS, ShellColors, button_icon, button_menu_item, card, divider,
    paper_bar,
};

fn header_message(action: HeaderAction) -> Message {
    Message::Shell(ShellEvent::Header(action))
}

/// Renders the header bar.
pub fn view_header<'a>(
    user: &'a CurrentUser,
    viewport: ViewportClass,
    is_dark: bool,
) -> Element<'a, Message> {
    let mut bar = row![].spacing(SPACING_SM).align_y(Alignment::Center);

    if ShellHeader::show_menu_button(viewport) {
        bar = bar.push(
            button(lucide::menu().size(ICON_SIZE_MD))
                .on_press(header_message(HeaderAction::ToggleMenu))
                .padding(SPACING_SM)
                .style(button_icon),
        );
    }

    let mut identity = column![text(ShellHeader::greeting(&user.name, viewport)).size(18)];
    if let Some(caption) = ShellHeader::role_caption(user.role) {
        identity = identity.push(text(caption).size(12).style(|theme: &Theme| text::Style {
            color: Some(theme.shell().text_secondary),
        }));
    }

    let theme_icon = if is_dark {
        lucide::sun()
    } else {
        lucide::moon()
    };
    let theme_toggle = tooltip(
        button(theme_icon.size(ICON_SIZE_MD))
            .on_press(header_message(HeaderAction::ToggleTheme))
            .padding(SPACING_SM)
            .style(button_icon),
        container(text(ShellHeader::theme_toggle_hint(is_dark)).size(12))
            .padding([SPACING_XS, SPACING_SM])
            .style(card),
        tooltip::Position::Bottom,
    );

    let bell = button(
        row![lucide::bell().size(ICON_SIZE_MD), count_badge(NOTIFICATION_COUNT)]
            .spacing(2.0)
            .align_y(Alignment::Center),
    )
    .padding(SPACING_SM)
    .style(button_icon);

    let account_button = button(avatar(&user.name))
        .on_press(header_message(HeaderAction::OpenAccountMenu))
        .padding(2.0)
        .style(button_icon);

    bar = bar
        .push(identity)
        .push(space::horizontal())
        .push(theme_toggle)
        .push(bell)
        .push(account_button);

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, SPACING_MD])
        .align_y(Alignment::Center)
        .style(paper_bar)
        .into()
}

/// Account dropdown, anchored under the avatar.
///
/// Clicking anywhere outside the menu dismisses it.
pub fn view_account_menu<'a>(user: &'a CurrentUser) -> Element<'a, Message> {
    let item = |icon: iced::widget::Text<'static>, label: &'static str, action: HeaderAction| {
        button(
            row![icon.size(18), text(label).size(14)]
                .spacing(SPACING_SM)
                .align_y(Alignment::Center),
        )
        .on_press(header_message(action))
        .width(Length::Fill)
        .padding([SPACING_SM, SPACING_MD])
        .style(button_menu_item)
    };

    let menu = container(
        column![
            container(
                column![
                    text(&user.name).size(15),
                    text(user.role.label()).size(12).style(|theme: &Theme| text::Style {
                        color: Some(theme.shell().text_secondary),
                    }),
                ]
                .spacing(2.0)
            )
            .padding([SPACING_SM, SPACING_MD]),
            rule::horizontal(1).style(divider),
            item(lucide::user(), "Profile", HeaderAction::Profile),
            item(lucide::settings(), "Settings", HeaderAction::Settings),
            rule::horizontal(1).style(divider),
            item(lucide::log_out(), "Logout", HeaderAction::Logout),
        ]
        .spacing(SPACING_XS),
    )
    .width(Length::Fixed(MENU_WIDTH))
    .padding([SPACING_XS, 0.0])
    .style(card);

    let dismiss = mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
        .on_press(header_message(HeaderAction::CloseAccountMenu));

    let anchored = container(menu)
        .width(Length::Fill)
        .align_x(Alignment::End)
        .padding(Padding {
            top: HEADER_HEIGHT - SPACING_XS,
            right: SPACING_MD,
            bottom: 0.0,
            left: 0.0,
        });

    stack![dismiss, anchored].into()
}

/// Circle with the user's initials.
fn avatar<'a>(name: &str) -> Element<'a, Message> {
    container(text(ShellHeader::initials(name)).size(14))
        .center_x(Length::Fixed(AVATAR_SIZE))
        .center_y(Length::Fixed(AVATAR_SIZE))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.shell().secondary.into()),
            text_color: Some(iced::Color::WHITE),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Small pill with a count.
pub fn count_badge<'a>(count: u32) -> Element<'a, Message> {
    container(text(count.to_string()).size(11))
        .padding([1.0, 6.0])
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.danger.base.color.into()),
                text_color: Some(palette.danger.base.text),
                border: Border {
                    radius: BORDER_RADIUS_MD.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}
