//! Shell frame composition.
//!
//! Layers, bottom to top:
//!
//! 1. header above the content region, which is inset by the content offset
//! 2. the drawer: beside the content when pinned, or above a scrim when
//!    it is an overlay
//! 3. the account dropdown, when open
//! 4. toasts

use iced::widget::{Space, column, container, mouse_area, opaque, row, scrollable, stack};
use iced::{Element, Length, Padding, Theme};
use nova_shell::{DrawerVariant, ShellEvent};

use crate::component::{view_account_menu, view_drawer, view_header, view_toasts};
use crate::message::Message;
use crate::route::Page;
use crate::state::AppState;
use crate::theme::{HEADER_HEIGHT, SPACING_LG, ShellColors};
use crate::view::{view_dashboard, view_not_found};

pub fn view_shell(state: &AppState) -> Element<'_, Message> {
    let frame = &state.frame;
    let layout = frame.layout();
    let current_path = state.current_path();

    let page = match Page::resolve(current_path) {
        Page::Dashboard => view_dashboard(),
        Page::NotFound => view_not_found(current_path),
    };

    let content = container(scrollable(container(page).padding(SPACING_LG)))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: layout.content_offset,
        });

    let base = column![
        view_header(frame.user(), frame.viewport(), frame.is_dark()),
        content
    ];

    let mut layers = stack![base];

    if layout.drawer.is_open {
        let drawer = view_drawer(
            frame.nav_items(current_path),
            layout.drawer.variant,
            layout.drawer_width,
        );
        match layout.drawer.variant {
            DrawerVariant::Pinned => {
                layers = layers.push(column![
                    Space::new().height(Length::Fixed(HEADER_HEIGHT)),
                    drawer
                ]);
            }
            DrawerVariant::Overlay => {
                if layout.show_scrim {
                    layers = layers.push(opaque(scrim()));
                }
                layers = layers.push(row![opaque(drawer)]);
            }
        }
    }

    if frame.header().account_menu_open() {
        layers = layers.push(view_account_menu(frame.user()));
    }

    if !state.toasts.is_empty() {
        layers = layers.push(view_toasts(&state.toasts));
    }

    layers.into()
}

/// Dimmed backdrop; clicking it closes the drawer.
fn scrim<'a>() -> Element<'a, Message> {
    mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.shell().scrim.into()),
                ..Default::default()
            }),
    )
    .on_press(Message::Shell(ShellEvent::CloseDrawer))
    .into()
}
