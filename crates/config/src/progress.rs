//! Progress bar configuration.

use serde::{Deserialize, Serialize};

/// Default minimum width, in percent, of a nonempty segment.
///
/// This is the only place the default lives; the segment sizing in
/// `tgi-protocol` takes the floor as an argument.
pub const DEFAULT_MIN_SEGMENT_PERCENT: f64 = 5.0;

/// Largest floor that still lets all six segments fit in the bar.
pub const MAX_MIN_SEGMENT_PERCENT: f64 = 100.0 / 6.0;

/// Configuration for progress bar rendering.
///
/// # Examples
///
/// ```
/// use tgi_config::ProgressConfig;
///
/// let config = ProgressConfig::default();
/// assert_eq!(config.min_segment_percent, 5.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Nonzero segments narrower than this are widened to it before the
    /// widths are rescaled to 100.
    #[serde(default = "default_min_segment_percent")]
    pub min_segment_percent: f64,
}

fn default_min_segment_percent() -> f64 {
    DEFAULT_MIN_SEGMENT_PERCENT
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            min_segment_percent: DEFAULT_MIN_SEGMENT_PERCENT,
        }
    }
}

impl ProgressConfig {
    /// Validates the progress configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the floor is not in `(0, 100/6]`.
    pub fn validate(&self) -> crate::Result<()> {
        let floor = self.min_segment_percent;
        if !floor.is_finite() || floor <= 0.0 || floor > MAX_MIN_SEGMENT_PERCENT {
            return Err(crate::ConfigError::InvalidSegmentFloor {
                reason: format!(
                    "minimum segment percent {floor} must be above 0 and at most {MAX_MIN_SEGMENT_PERCENT:.2}"
                ),
            });
        }
        Ok(())
    }
}
