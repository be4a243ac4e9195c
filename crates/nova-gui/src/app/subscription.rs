//! Application subscriptions.
//!
//! | Subscription | Interval | Condition | Purpose |
//! |--------------|----------|-----------|---------|
//! | Window opened | Once per window | Always | Actual width at mount |
//! | Window resize | Continuous | Always | Viewport width for the drawer layout |
//! | Toast tick | 250ms | Toast visible | Auto-hide expired toasts |

use std::time::Duration;

use iced::{Event, Subscription, event, time, window};
use nova_shell::ShellEvent;

use crate::message::{Message, ToastMessage};
use crate::state::AppState;

/// Create all application subscriptions.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([
        opened_subscription(),
        resize_subscription(),
        toast_subscription(state),
    ])
}

/// Window opened subscription.
///
/// The platform may open the window at a size other than the configured
/// one without a following resize event.
fn opened_subscription() -> Subscription<Message> {
    event::listen_with(window_opened)
}

fn window_opened(event: Event, _status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::Shell(ShellEvent::Resized(size.width)))
        }
        _ => None,
    }
}

/// Window resize subscription.
///
/// Every width change is forwarded; the shell decides whether a breakpoint
/// was crossed.
fn resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::Shell(ShellEvent::Resized(size.width)))
}

/// Toast auto-hide subscription.
///
/// Inactive when no toast is queued.
fn toast_subscription(state: &AppState) -> Subscription<Message> {
    if state.toasts.is_empty() {
        Subscription::none()
    } else {
        time::every(Duration::from_millis(250)).map(|_| Message::Toast(ToastMessage::Tick))
    }
}
