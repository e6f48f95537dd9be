//! Shared protocol types for the tgi application.
//!
//! This crate defines the core types used across all tgi components:
//! tasks and their states, per-state buckets, progress bar segment sizing,
//! task group snapshots, and TUI messages.
//!
//! # Overview
//!
//! - [`task`]: Task records and the [`TaskState`] enum
//! - [`buckets`]: Classification of tasks into per-state buckets
//! - [`segment`]: Segment widths, labels, and label-to-state matching
//! - [`snapshot`]: Task group snapshots loaded from JSON
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! ```
//! use tgi_protocol::{StatusBuckets, Task, TaskState, segment_percentages};
//!
//! let tasks = vec![
//!     Task::new("a", TaskState::Completed),
//!     Task::new("b", TaskState::Completed),
//!     Task::new("c", TaskState::Failed),
//!     Task::new("d", TaskState::Pending),
//! ];
//! let buckets = StatusBuckets::classify(&tasks);
//! let segments = segment_percentages(&buckets, tasks.len(), 5.0);
//!
//! assert_eq!(segments[0].label(), "C(2)");
//! assert_eq!(segments[0].percent, 50.0);
//! ```

pub mod buckets;
pub mod dummy;
pub mod error;
pub mod message;
pub mod segment;
pub mod snapshot;
pub mod task;

// Re-export primary types at crate root for convenience
pub use buckets::StatusBuckets;
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use segment::{EMPTY_SEGMENT_LABEL, Segment, segment_percentages, status_from_label};
pub use snapshot::TaskGroupSnapshot;
pub use task::{Task, TaskDefinition, TaskMetadata, TaskState, TaskStatus, UnknownTaskState};
