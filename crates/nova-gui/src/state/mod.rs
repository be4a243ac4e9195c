//! Application state.
//!
//! - `toast` - toast queue

pub mod toast;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use nova_shell::{
    FileStore, KeyValueStore, MemoryRouter, MemoryStore, Navigator, ShellConfig, ShellFrame,
};

pub use toast::{AUTO_HIDE, MAX_VISIBLE, Toast, ToastQueue};

/// Preference storage chosen at startup.
pub type PreferenceStore = Box<dyn KeyValueStore + Send>;

/// All application state.
pub struct AppState {
    pub frame: ShellFrame<PreferenceStore>,
    pub router: MemoryRouter,
    pub toasts: ToastQueue,
    /// Set by the shell's logout handler, consumed by `update`.
    logout_requested: Arc<AtomicBool>,
}

impl AppState {
    /// Build state from a loaded config.
    pub fn new(config: ShellConfig) -> Self {
        let store = open_store(&config);
        Self::with_store(config, store)
    }

    pub fn with_store(config: ShellConfig, store: PreferenceStore) -> Self {
        let logout_requested = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&logout_requested);
        let width = config.window.width;

        let frame = ShellFrame::builder(config, store)
            .viewport_width(width)
            .on_logout(move || flag.store(true, Ordering::SeqCst))
            .build();

        Self {
            frame,
            router: MemoryRouter::default(),
            toasts: ToastQueue::new(),
            logout_requested,
        }
    }

    pub fn current_path(&self) -> &str {
        self.router.current_path()
    }

    /// Returns `true` once per logout request.
    pub fn take_logout_request(&self) -> bool {
        self.logout_requested.swap(false, Ordering::SeqCst)
    }
}

/// Open the preferences file, or fall back to memory when there is no
/// config directory on this platform.
fn open_store(config: &ShellConfig) -> PreferenceStore {
    match FileStore::in_config_dir(&config.storage.file_name) {
        Some(store) => {
            tracing::info!("Preferences stored at {:?}", store.path());
            Box::new(store)
        }
        None => {
            tracing::warn!("No config directory available, preferences last for this session only");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_shell::{HeaderAction, ShellEvent};

    fn state() -> AppState {
        AppState::with_store(ShellConfig::default(), Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_starts_at_root() {
        let state = state();
        assert_eq!(state.current_path(), "/");
        assert!(state.frame.layout().drawer.is_open);
    }

    #[test]
    fn test_logout_request_taken_once() {
        let mut state = state();
        state.frame.handle(
            ShellEvent::Header(HeaderAction::Logout),
            &mut state.router,
            Some(&mut state.toasts),
        );
        assert!(state.take_logout_request());
        assert!(!state.take_logout_request());
    }
}
