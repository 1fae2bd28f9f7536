//! Persistence error types.
//!
//! Store operations return structured errors with user-friendly messages.
//! Callers treat every one of them as recoverable: in-memory state stays
//! authoritative and a failed read falls back to defaults.

use std::path::PathBuf;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key contains characters that cannot map to a file name.
    #[error("Invalid store key: {key}")]
    InvalidKey { key: String },

    /// Serialization error.
    #[error("Failed to serialize value for {key}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored bytes could not be decoded.
    #[error("Failed to deserialize value for {key}")]
    Deserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored settings were written by a newer schema.
    #[error("Stored {key} version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion {
        key: String,
        found: u32,
        max_supported: u32,
    },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::InvalidKey { key } => {
                format!("'{key}' cannot be used as a storage key.")
            }
            Self::Serialization { key, .. } => {
                format!("An error occurred while saving {key}.")
            }
            Self::Deserialization { key, .. } => {
                format!("Saved {key} could not be read and was reset to defaults.")
            }
            Self::UnsupportedVersion { key, .. } => {
                format!("Saved {key} came from a newer version and was reset to defaults.")
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::InvalidKey { .. } => None,
            Self::Serialization { .. } => None,
            Self::Deserialization { .. } | Self::UnsupportedVersion { .. } => {
                Some("Run `roster reset --yes` to start over with fresh data.".into())
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
