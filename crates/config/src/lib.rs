//! Configuration management for the tgi application.
//!
//! This crate handles loading, validating, and persisting configuration.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`polling`]: Snapshot reload interval
//! - [`progress`]: Progress bar segment sizing options
//! - [`notifications`]: Build-done notification options
//! - [`persistence`]: Config file discovery, reading, and writing
//! - [`error`]: Error types for configuration operations
//!
//! # File Format
//!
//! ```json5
//! {
//!   polling: { interval_secs: 5 },
//!   progress: { min_segment_percent: 5.0 },
//!   notifications: { enabled: true, message: "Build done" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use tgi_config::Config;
//!
//! # fn example() -> tgi_config::Result<()> {
//! let config = Config::load()?;
//! println!("Reload every {:?}", config.polling.interval());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod notifications;
pub mod persistence;
pub mod polling;
pub mod progress;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use notifications::NotificationConfig;
pub use polling::PollingConfig;
pub use progress::ProgressConfig;
