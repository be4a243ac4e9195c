//! Light/dark display preference.
//!
//! The preference is read once when the store is opened and written back
//! synchronously on every change. Storage failures never reach the caller:
//! they are logged and the in-memory value stays authoritative for the
//! rest of the session.

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

/// Storage key holding the preference.
pub const THEME_MODE_KEY: &str = "theme-mode";

/// Appearance mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Value written to storage.
    pub fn as_storage_value(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Only the exact string `"dark"` selects dark mode.
    pub fn from_storage_value(value: Option<&str>) -> Self {
        Self::from_dark(value == Some("dark"))
    }

    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Read the stored preference. Absent, unreadable or unrecognised values
/// all mean light mode.
pub fn get_initial<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> bool {
    match store.get(key) {
        Ok(value) => ThemeMode::from_storage_value(value.as_deref()).is_dark(),
        Err(e) => {
            tracing::warn!("Could not read theme preference, using light mode: {}", e);
            false
        }
    }
}

pub fn toggle(current: bool) -> bool {
    !current
}

/// Write the preference. Failures are logged and otherwise ignored.
pub fn persist<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, is_dark: bool) {
    let value = ThemeMode::from_dark(is_dark).as_storage_value();
    if let Err(e) = store.set(key, value) {
        tracing::warn!("Could not save theme preference '{}': {}", value, e);
    }
}

/// Owns the dark-mode flag and the storage it is mirrored to.
///
/// There is exactly one of these per session, built by the composition
/// root and lent to whoever needs to read or toggle it.
#[derive(Debug)]
pub struct ThemeModeStore<S> {
    store: S,
    key: String,
    is_dark: bool,
}

impl<S: KeyValueStore> ThemeModeStore<S> {
    /// Open with the default `"theme-mode"` key.
    pub fn open(store: S) -> Self {
        Self::open_with_key(store, THEME_MODE_KEY)
    }

    pub fn open_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let is_dark = get_initial(&store, &key);
        tracing::debug!("Restored theme preference: dark={}", is_dark);
        Self {
            store,
            key,
            is_dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.is_dark)
    }

    /// Flip the preference and write it through. Returns the new value.
    pub fn toggle_mode(&mut self) -> bool {
        self.set_dark(toggle(self.is_dark));
        self.is_dark
    }

    /// Select a mode explicitly. Writes even if unchanged.
    pub fn set_dark(&mut self, is_dark: bool) {
        self.is_dark = is_dark;
        persist(&mut self.store, &self.key, is_dark);
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
