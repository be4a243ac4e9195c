//! Seams to the collaborators the shell drives but does not own.
//!
//! The router, toast delivery and session termination all live outside the
//! shell. The shell only calls into them.

/// Imperative navigation capability.
pub trait Navigator {
    /// Path currently mounted in the content region.
    fn current_path(&self) -> &str;

    /// Navigate to `path`.
    fn navigate(&mut self, path: &str);
}

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// Fire-and-forget notification delivery.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

/// External session termination.
pub type LogoutHandler = Box<dyn FnMut() + Send>;

/// In-memory router that records navigation history.
///
/// Navigating to the current path is a no-op, so repeated clicks on the
/// selected entry do not grow the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRouter {
    history: Vec<String>,
}

impl MemoryRouter {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: vec![initial.into()],
        }
    }

    /// Paths visited, oldest first. Never empty.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Step back one entry. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryRouter {
    fn current_path(&self) -> &str {
        self.history.last().map_or("/", String::as_str)
    }

    fn navigate(&mut self, path: &str) {
        if path == self.current_path() {
            return;
        }
        tracing::debug!("Navigating to {}", path);
        self.history.push(path.to_string());
    }
}
