//! Build-done notification configuration.

use serde::{Deserialize, Serialize};

/// Default notification text.
pub const DEFAULT_NOTIFICATION_MESSAGE: &str = "Build done";

/// Configuration for the notification sent when a build settles.
///
/// # Examples
///
/// ```
/// use tgi_config::NotificationConfig;
///
/// let config = NotificationConfig::default();
/// assert!(config.enabled);
/// assert_eq!(config.message, "Build done");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Whether to notify at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Text of the notification.
    #[serde(default = "default_message")]
    pub message: String,
}

fn default_enabled() -> bool {
    true
}

fn default_message() -> String {
    DEFAULT_NOTIFICATION_MESSAGE.to_string()
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            message: default_message(),
        }
    }
}

impl NotificationConfig {
    /// Returns a configuration with notifications turned off.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Validates the notification configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if notifications are enabled with a blank message.
    pub fn validate(&self) -> crate::Result<()> {
        if self.enabled && self.message.trim().is_empty() {
            return Err(crate::ConfigError::EmptyNotificationMessage);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_message_is_invalid_only_when_enabled() {
        let mut config = NotificationConfig {
            enabled: true,
            message: "  ".to_string(),
        };
        assert!(config.validate().is_err());

        config.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserialize_partial() {
        let config: NotificationConfig = serde_json::from_str(r#"{"enabled": false}"#).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.message, DEFAULT_NOTIFICATION_MESSAGE);
    }
}
