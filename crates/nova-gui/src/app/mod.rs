//! Main application module for NovaBank.
//!
//! Elm architecture: State → Message → Update → View. All state changes
//! happen in [`App::update`]; views are pure functions of [`AppState`].

mod subscription;

use std::time::Instant;

use iced::{Element, Subscription, Task, Theme};
use nova_shell::{CurrentUser, Navigator, Severity, ShellConfig};

use crate::message::{Message, ToastMessage};
use crate::route::Page;
use crate::state::AppState;
use crate::theme::nova_theme;
use crate::view::view_shell;

// =============================================================================
// APPLICATION
// =============================================================================

/// Root of the Iced application.
pub struct App {
    pub state: AppState,
}

impl App {
    /// Create the application from a loaded config.
    pub fn new(config: ShellConfig) -> (Self, Task<Message>) {
        let mut app = Self {
            state: AppState::new(config),
        };
        app.state
            .toasts
            .push_at("Welcome to NovaBank!", Severity::Success, Instant::now());
        (app, Task::none())
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Shell(event) => {
                let state = &mut self.state;
                state
                    .frame
                    .handle(event, &mut state.router, Some(&mut state.toasts));

                if state.take_logout_request() {
                    self.handle_logout();
                }
                Task::none()
            }

            Message::Toast(ToastMessage::Dismiss(id)) => {
                self.state.toasts.dismiss(id, Instant::now());
                Task::none()
            }

            Message::Toast(ToastMessage::Tick) => {
                self.state.toasts.tick(Instant::now());
                Task::none()
            }
        }
    }

    /// Session end: drop back to the anonymous identity on the dashboard.
    fn handle_logout(&mut self) {
        let state = &mut self.state;
        tracing::info!("Signed out {}", state.frame.user().name);
        state.frame.set_user(CurrentUser::anonymous());
        state.router.navigate("/");
        state
            .toasts
            .push_at("Signed out", Severity::Success, Instant::now());
    }

    pub fn view(&self) -> Element<'_, Message> {
        view_shell(&self.state)
    }

    pub fn title(&self) -> String {
        let page = Page::resolve(self.state.current_path());
        format!("NovaBank - {}", page.title())
    }

    pub fn theme(&self) -> Theme {
        nova_theme(self.state.frame.is_dark())
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}
