//! Errors raised while locating, reading, or validating configuration.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    #[error("cannot encode config as JSON: {0}")]
    SerializeJson(#[from] serde_json::Error),

    #[error("polling.interval_secs: {reason}")]
    InvalidPollingInterval { reason: String },

    #[error("progress.min_segment_percent: {reason}")]
    InvalidSegmentFloor { reason: String },

    /// Notifications are enabled with nothing to say.
    #[error("notifications.message must not be empty")]
    EmptyNotificationMessage,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
