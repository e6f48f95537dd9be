//! Error types for the tgi-protocol crate.
//!
//! This module defines the errors that can occur when loading task group
//! snapshots.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Failed to read a snapshot file.
    #[error("failed to read snapshot at {path}: {source}")]
    ReadSnapshot {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to deserialize a task group snapshot from JSON.
    #[error("failed to deserialize from JSON: {0}")]
    DeserializationFailed(#[source] serde_json::Error),

    /// The snapshot carried an empty task group id.
    #[error("invalid task group: taskGroupId cannot be empty")]
    MissingTaskGroupId,
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ProtocolError::MissingTaskGroupId;
        assert_eq!(
            err.to_string(),
            "invalid task group: taskGroupId cannot be empty"
        );

        let err = ProtocolError::ReadSnapshot {
            path: PathBuf::from("/tmp/group.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/tmp/group.json"));
    }
}
