//! How often the task group snapshot is re-read.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

/// Seconds between reloads when the config says nothing.
pub const DEFAULT_POLLING_INTERVAL: u32 = 5;

/// Accepted reload intervals, in seconds.
pub const POLLING_INTERVAL_RANGE: RangeInclusive<u32> = 1..=3600;

/// Snapshot reload settings.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tgi_config::PollingConfig;
///
/// let config = PollingConfig::with_interval(30);
/// assert_eq!(config.interval(), Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub interval_secs: u32,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self::with_interval(DEFAULT_POLLING_INTERVAL)
    }
}

impl PollingConfig {
    #[must_use]
    pub fn with_interval(interval_secs: u32) -> Self {
        Self { interval_secs }
    }

    /// The reload interval as a [`Duration`].
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.into())
    }

    /// Checks the interval against [`POLLING_INTERVAL_RANGE`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPollingInterval`] when out of range.
    pub fn validate(&self) -> Result<()> {
        if POLLING_INTERVAL_RANGE.contains(&self.interval_secs) {
            return Ok(());
        }
        Err(ConfigError::InvalidPollingInterval {
            reason: format!(
                "{}s is outside {}..={}s",
                self.interval_secs,
                POLLING_INTERVAL_RANGE.start(),
                POLLING_INTERVAL_RANGE.end()
            ),
        })
    }
}
