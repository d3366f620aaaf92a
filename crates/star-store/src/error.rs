//! Storage error types.
//!
//! All store operations return structured errors that provide
//! user-friendly messages and optional remediation hints.

use std::path::PathBuf;
use thiserror::Error;

/// Star store operation error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("Failed to {operation}: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No durable unit exists for the requested star.
    #[error("Star not found: {name}")]
    NotFound { name: String },

    /// A durable unit exists but could not be decoded into a valid star.
    #[error("Corrupt star record at {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// Serialization error.
    #[error("Failed to serialize star {name}")]
    Serialization {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete write of {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Returns true for recoverable lookup misses.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} at {}", operation, path.display())
            }
            Self::NotFound { name } => {
                format!("There is no star named {name} in the catalog.")
            }
            Self::Corrupt { path, reason } => {
                format!(
                    "The star record at {} could not be read: {}",
                    path.display(),
                    reason
                )
            }
            Self::Serialization { name, .. } => {
                format!("An error occurred while encoding star {name}.")
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the star record to {}. Check disk space and permissions.",
                    target_path.display()
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if operation.starts_with("read") {
                    Some("Check that the catalog directory exists and is readable.".into())
                } else {
                    Some("Check that you have permission to write to the catalog directory.".into())
                }
            }
            Self::NotFound { .. } => Some("List the catalog to see the stored names.".into()),
            Self::Corrupt { .. } => {
                Some("Remove or restore the damaged file; other stars are unaffected.".into())
            }
            Self::Serialization { .. } => None,
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different catalog directory.".into())
            }
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
