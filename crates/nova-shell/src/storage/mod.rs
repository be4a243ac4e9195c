//! Durable key-value storage for shell preferences.
//!
//! The shell only ever stores short string values under well-known keys,
//! so the abstraction is a plain string map with fallible access:
//!
//! - `MemoryStore` - process-local map (tests, fallback when no config dir)
//! - `FileStore` - TOML table in the platform config directory

mod file;
mod memory;

pub use file::FileStore;
pub(crate) use file::config_dir;
pub use memory::MemoryStore;

use crate::error::StorageError;

/// String key-value storage scoped to one user profile.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
