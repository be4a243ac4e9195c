//! Toast queue.
//!
//! At most [`MAX_VISIBLE`] toasts are on screen; later ones wait in line and
//! appear as earlier ones leave. A visible toast hides itself
//! [`AUTO_HIDE`] after it was first shown. A message identical to one that
//! is already queued or visible is dropped.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use nova_shell::{Notifier, Severity};

pub const MAX_VISIBLE: usize = 3;
pub const AUTO_HIDE: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// When the toast became visible. `None` while waiting in line.
    shown_at: Option<Instant>,
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a toast. Returns its id, or `None` if it duplicates one
    /// already queued or showing.
    pub fn push_at(&mut self, message: &str, severity: Severity, now: Instant) -> Option<u64> {
        if self.toasts.iter().any(|toast| toast.message == message) {
            tracing::debug!("Dropping duplicate toast: {}", message);
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            message: message.to_string(),
            severity,
            shown_at: None,
        });
        self.promote(now);
        Some(id)
    }

    /// Remove expired toasts and show waiting ones.
    pub fn tick(&mut self, now: Instant) {
        let before = self.toasts.len();
        self.toasts.retain(|toast| {
            toast
                .shown_at
                .is_none_or(|shown| now.saturating_duration_since(shown) < AUTO_HIDE)
        });
        if self.toasts.len() != before {
            self.promote(now);
        }
    }

    /// Close a toast before it expires.
    pub fn dismiss(&mut self, id: u64, now: Instant) {
        self.toasts.retain(|toast| toast.id != id);
        self.promote(now);
    }

    /// Toasts currently on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().take(MAX_VISIBLE)
    }

    pub fn waiting(&self) -> usize {
        self.toasts.len().saturating_sub(MAX_VISIBLE)
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn promote(&mut self, now: Instant) {
        for toast in self.toasts.iter_mut().take(MAX_VISIBLE) {
            toast.shown_at.get_or_insert(now);
        }
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.push_at(message, severity, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(queue: &ToastQueue) -> Vec<&str> {
        queue.visible().map(|toast| toast.message.as_str()).collect()
    }

    #[test]
    fn test_duplicate_is_dropped() {
        let now = Instant::now();
        let mut queue = ToastQueue::new();
        assert!(queue.push_at("Dark mode enabled", Severity::Info, now).is_some());
        assert!(queue.push_at("Dark mode enabled", Severity::Info, now).is_none());
        assert_eq!(messages(&queue), ["Dark mode enabled"]);
    }

    #[test]
    fn test_at_most_three_visible() {
        let now = Instant::now();
        let mut queue = ToastQueue::new();
        for message in ["one", "two", "three", "four"] {
            queue.push_at(message, Severity::Info, now);
        }
        assert_eq!(messages(&queue), ["one", "two", "three"]);
        assert_eq!(queue.waiting(), 1);
    }

    #[test]
    fn test_expiry_promotes_waiting_toast() {
        let start = Instant::now();
        let mut queue = ToastQueue::new();
        for message in ["one", "two", "three", "four"] {
            queue.push_at(message, Severity::Success, start);
        }

        queue.tick(start + Duration::from_millis(3999));
        assert_eq!(messages(&queue), ["one", "two", "three"]);

        let later = start + AUTO_HIDE;
        queue.tick(later);
        assert_eq!(messages(&queue), ["four"]);

        // "four" got its own full timeout from the moment it appeared.
        queue.tick(later + Duration::from_millis(3999));
        assert_eq!(messages(&queue), ["four"]);
        queue.tick(later + AUTO_HIDE);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dismiss() {
        let now = Instant::now();
        let mut queue = ToastQueue::new();
        let first = queue.push_at("one", Severity::Warning, now).unwrap();
        queue.push_at("two", Severity::Error, now);

        queue.dismiss(first, now);
        assert_eq!(messages(&queue), ["two"]);
        queue.push_at("one", Severity::Warning, now);
        assert_eq!(messages(&queue), ["two", "one"]);
    }

    #[test]
    fn test_notifier_impl() {
        let mut queue = ToastQueue::new();
        let notifier: &mut dyn Notifier = &mut queue;
        notifier.notify("Welcome to NovaBank!", Severity::Success);
        assert_eq!(queue.visible().count(), 1);
    }
}
