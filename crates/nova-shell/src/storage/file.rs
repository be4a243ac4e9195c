//! TOML-file preference storage.
//!
//! Preferences live in a single flat TOML table in the platform config
//! directory:
//! - macOS: ~/Library/Application Support/com.NovaBank.NovaBank/
//! - Windows: %APPDATA%/NovaBank/NovaBank/config/
//! - Linux: ~/.config/novabank/
//!
//! ```toml
//! theme-mode = "dark"
//! ```

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::KeyValueStore;
use crate::error::StorageError;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "NovaBank";
const APP_NAME: &str = "NovaBank";

/// Preference store backed by one TOML file.
///
/// Every `set` rewrites the whole file with a temp file + rename, so a
/// crash mid-write leaves the previous contents intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store at an explicit path. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store named `file_name` in the platform config directory.
    ///
    /// Returns `None` if the platform-specific directory cannot be determined.
    pub fn in_config_dir(file_name: &str) -> Option<Self> {
        config_dir().map(|dir| Self::new(dir.join(file_name)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(StorageError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        toml::from_str(&content).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn write_table(&self, table: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content = toml::to_string(table).map_err(|e| StorageError::Serialize {
            reason: e.to_string(),
        })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Io {
                operation: "create directory for",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let temp_path = self.path.with_extension("toml.tmp");
        let mut file = File::create(&temp_path).map_err(|e| StorageError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(content.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| StorageError::Io {
                operation: "write",
                path: temp_path.clone(),
                source: e,
            })?;

        fs::rename(&temp_path, &self.path).map_err(|e| StorageError::Io {
            operation: "replace",
            path: self.path.clone(),
            source: e,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_table()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut table = match self.read_table() {
            Ok(table) => table,
            Err(StorageError::Corrupt { path, reason }) => {
                tracing::warn!("Discarding corrupt preferences at {:?}: {}", path, reason);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };

        table.insert(key.to_string(), value.to_string());
        self.write_table(&table)?;
        tracing::debug!("Stored preference {} in {:?}", key, self.path);
        Ok(())
    }
}

/// Platform config directory for NovaBank.
pub(crate) fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("preferences.toml"));
        assert_eq!(store.get("theme-mode").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_from_fresh_handle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        let mut store = FileStore::new(&path);
        store.set("theme-mode", "dark").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("theme-mode").unwrap().as_deref(), Some("dark"));
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_set_keeps_other_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "language = \"en\"\n").unwrap();

        let mut store = FileStore::new(&path);
        store.set("theme-mode", "light").unwrap();

        assert_eq!(store.get("language").unwrap().as_deref(), Some("en"));
        assert_eq!(store.get("theme-mode").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_corrupt_file_is_reported_then_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "theme-mode = [1, 2").unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(
            store.get("theme-mode"),
            Err(StorageError::Corrupt { .. })
        ));

        store.set("theme-mode", "dark").unwrap();
        assert_eq!(store.get("theme-mode").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_unwritable_location_is_io_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let mut store = FileStore::new(blocker.join("preferences.toml"));
        assert!(matches!(
            store.set("theme-mode", "dark"),
            Err(StorageError::Io { .. })
        ));
    }
}
