//! Message module for NovaBank.
//!
//! All user interactions and runtime events flow through [`Message`].

use nova_shell::ShellEvent;

/// Root message enum for the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Shell chrome: resize, drawer, navigation and header actions
    Shell(ShellEvent),

    /// Toast notifications
    Toast(ToastMessage),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToastMessage {
    Dismiss(u64),
    /// Periodic check for expired toasts
    Tick,
}

impl From<ShellEvent> for Message {
    fn from(event: ShellEvent) -> Self {
        Self::Shell(event)
    }
}
