//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the tgi application.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::notifications::NotificationConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::polling::PollingConfig;
use crate::progress::ProgressConfig;

/// The main configuration struct for the tgi application.
///
/// Every section has defaults, so an empty file (or no file) is valid.
///
/// # Examples
///
/// ```
/// use tgi_config::{Config, NotificationConfig, PollingConfig};
///
/// let config = Config {
///     polling: PollingConfig::with_interval(30),
///     notifications: NotificationConfig::disabled(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// How often the snapshot file is re-read.
    #[serde(default)]
    pub polling: PollingConfig,

    /// Progress bar rendering options.
    #[serde(default)]
    pub progress: ProgressConfig,

    /// The notification sent when a build settles.
    #[serde(default)]
    pub notifications: NotificationConfig,
}

impl Config {
    /// Loads configuration from the default file locations.
    ///
    /// Falls back to [`Config::default`] when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tgi_config::Config;
    ///
    /// # fn example() -> tgi_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Reload every {} seconds", config.polling.interval_secs);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates every section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate(&self) -> Result<()> {
        self.polling.validate()?;
        self.progress.validate()?;
        self.notifications.validate()?;
        Ok(())
    }
}
