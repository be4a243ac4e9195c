//! Shell configuration.
//!
//! Stored as TOML next to the preferences file. Every field has a default,
//! so an empty or partial file is valid:
//!
//! ```toml
//! [layout]
//! drawer_width = 300.0
//! wide_variant = "pinned"
//!
//! [layout.breakpoints]
//! md = 960.0
//!
//! [user]
//! name = "John Doe"
//! role = "admin"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShellError};
use crate::layout::{Breakpoints, DrawerVariant};
use crate::role::CurrentUser;
use crate::storage::config_dir;
use crate::theme::THEME_MODE_KEY;

const CONFIG_FILENAME: &str = "config.toml";

// =============================================================================
// ROOT CONFIG
// =============================================================================

/// Shell configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub layout: LayoutConfig,
    pub storage: StorageConfig,
    pub window: WindowConfig,
    /// Identity shown until a session collaborator supplies the real one.
    pub user: CurrentUser,
}

impl ShellConfig {
    /// Load from the default path.
    ///
    /// Returns defaults if the file is missing, unreadable or malformed.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("Could not determine config path, using defaults");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No config file found at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ShellError::Config {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        };

        let config: Self = toml::from_str(&content).map_err(|e| ShellError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Default config file path, `None` if there is no config directory.
    pub fn config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join(CONFIG_FILENAME))
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Drawer and breakpoint settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub breakpoints: Breakpoints,
    /// Drawer panel width in logical pixels.
    pub drawer_width: f32,
    /// Variant used on wide viewports. Compact viewports always overlay.
    pub wide_variant: DrawerVariant,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            drawer_width: 280.0,
            wide_variant: DrawerVariant::Pinned,
        }
    }
}

/// Where preferences are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub theme_key: String,
    /// Preferences file name inside the config directory.
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            theme_key: THEME_MODE_KEY.to_string(),
            file_name: "preferences.toml".to_string(),
        }
    }
}

/// Initial window geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            min_width: 360.0,
            min_height: 600.0,
        }
    }
}
