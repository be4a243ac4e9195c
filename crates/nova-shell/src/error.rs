//! Shell error types.
//!
//! Nothing in the shell is fatal. These errors surface from storage and
//! configuration so callers can log them; the theme store swallows storage
//! failures after logging and keeps its in-memory value authoritative.

use std::path::PathBuf;
use thiserror::Error;

/// Durable key-value storage error.
#[derive(Debug, Error)]
pub enum StorageError {
    /// File I/O error.
    #[error("Failed to {operation} preferences file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preferences file exists but is not a table of string values.
    #[error("Preferences file is corrupt: {path}")]
    Corrupt { path: PathBuf, reason: String },

    /// The in-memory table could not be serialized.
    #[error("Failed to serialize preferences: {reason}")]
    Serialize { reason: String },

    /// No backing storage is reachable on this platform.
    #[error("Preference storage is unavailable")]
    Unavailable,
}

/// Shell-level error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShellError {
    /// Two catalog entries share the same target path.
    #[error("Duplicate navigation path: {path}")]
    DuplicatePath { path: String },

    /// Two catalog entries share the same identifier.
    #[error("Duplicate navigation id: {id}")]
    DuplicateId { id: String },

    /// Storage failure.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration file could not be read or parsed.
    #[error("Invalid configuration at {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl ShellError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::DuplicatePath { path } => {
                format!("More than one navigation entry points at '{path}'.")
            }
            Self::DuplicateId { id } => {
                format!("More than one navigation entry is named '{id}'.")
            }
            Self::Storage(StorageError::Unavailable) => {
                "Preferences cannot be saved on this system. Changes last until you quit."
                    .to_string()
            }
            Self::Storage(err) => format!("Preferences could not be saved: {err}"),
            Self::Config { path, reason } => {
                format!(
                    "The configuration file at {} could not be used: {}",
                    path.display(),
                    reason
                )
            }
        }
    }
}

/// Result type alias for shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_converts_into_shell_error() {
        let err: ShellError = StorageError::Unavailable.into();
        assert!(matches!(err, ShellError::Storage(StorageError::Unavailable)));
        assert!(err.user_message().contains("until you quit"));
    }

    #[test]
    fn test_duplicate_path_message_names_path() {
        let err = ShellError::DuplicatePath {
            path: "/accounts".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate navigation path: /accounts");
        assert!(err.user_message().contains("/accounts"));
    }
}
