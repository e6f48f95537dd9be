//! Task-related types for the task group inspector.
//!
//! This module defines the task record as delivered by the queue's task
//! group listing, along with the [`TaskState`] enum used to bucket tasks.
//! The record is lenient: a missing or malformed `status` block, or a
//! `state` that is not a known state string, deserializes fine and simply
//! classifies to nothing.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// The resolution state of a task.
///
/// Variants are declared in display order: the order used for buckets,
/// progress bar segments, and the legend.
///
/// # Examples
///
/// ```
/// use tgi_protocol::TaskState;
///
/// let state: TaskState = "running".parse().unwrap();
/// assert_eq!(state, TaskState::Running);
/// assert!(!state.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    /// The task resolved successfully.
    Completed,
    /// The task ran and reported failure.
    Failed,
    /// The task resolved with an infrastructure or worker exception.
    Exception,
    /// The task exists but has not been scheduled yet.
    Unscheduled,
    /// The task is being executed by a worker.
    Running,
    /// The task is scheduled and waiting for a worker.
    Pending,
}

impl TaskState {
    /// All states in display order.
    pub const ALL: [TaskState; 6] = [
        Self::Completed,
        Self::Failed,
        Self::Exception,
        Self::Unscheduled,
        Self::Running,
        Self::Pending,
    ];

    /// Returns the position of this state in [`TaskState::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Completed => 0,
            Self::Failed => 1,
            Self::Exception => 2,
            Self::Unscheduled => 3,
            Self::Running => 4,
            Self::Pending => 5,
        }
    }

    /// Returns the lowercase wire name of this state.
    ///
    /// # Examples
    ///
    /// ```
    /// use tgi_protocol::TaskState;
    ///
    /// assert_eq!(TaskState::Exception.as_str(), "exception");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Exception => "exception",
            Self::Unscheduled => "unscheduled",
            Self::Running => "running",
            Self::Pending => "pending",
        }
    }

    /// Returns the capitalized display name, e.g. `"Completed"`.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Exception => "Exception",
            Self::Unscheduled => "Unscheduled",
            Self::Running => "Running",
            Self::Pending => "Pending",
        }
    }

    /// Returns `true` if the task has resolved (completed, failed, or exception).
    ///
    /// # Examples
    ///
    /// ```
    /// use tgi_protocol::TaskState;
    ///
    /// assert!(TaskState::Completed.is_terminal());
    /// assert!(TaskState::Exception.is_terminal());
    /// assert!(!TaskState::Pending.is_terminal());
    /// ```
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Exception)
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the six task states.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task state: {0}")]
pub struct UnknownTaskState(pub String);

impl FromStr for TaskState {
    type Err = UnknownTaskState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| UnknownTaskState(s.to_string()))
    }
}

/// Deserializes a field, replacing a value of the wrong shape with its default.
///
/// One broken task must not fail the whole listing it arrived in.
fn default_on_mismatch<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// The `status` block of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatus {
    /// Identifier of the task.
    #[serde(default, deserialize_with = "default_on_mismatch")]
    pub task_id: String,
    /// Raw state string. Kept unparsed so unknown states survive loading.
    #[serde(
        default,
        deserialize_with = "default_on_mismatch",
        skip_serializing_if = "Option::is_none"
    )]
    pub state: Option<String>,
}

/// Human-facing metadata of a task definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMetadata {
    /// Short task name, e.g. `"build-linux64/opt"`.
    #[serde(default, deserialize_with = "default_on_mismatch")]
    pub name: String,
}

/// The `task` block of a task (its definition).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Name and other human-facing fields of the definition.
    #[serde(default, deserialize_with = "default_on_mismatch")]
    pub metadata: TaskMetadata,
}

/// A task as listed in a task group.
///
/// The inspector never creates or mutates tasks; they are supplied by
/// whatever fetched the task group.
///
/// # Examples
///
/// ```
/// use tgi_protocol::{Task, TaskState};
///
/// let task = Task::new("abc123", TaskState::Pending).with_name("lint");
/// assert_eq!(task.state(), Some(TaskState::Pending));
/// assert_eq!(task.display_name(), "lint");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Runtime status: id and state. `None` when absent or malformed.
    #[serde(
        default,
        deserialize_with = "default_on_mismatch",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<TaskStatus>,
    /// Task definition, used only for its display name.
    #[serde(
        default,
        deserialize_with = "default_on_mismatch",
        skip_serializing_if = "Option::is_none"
    )]
    pub task: Option<TaskDefinition>,
}

impl Task {
    /// Creates a task with the given id and state and no definition.
    #[must_use]
    pub fn new(task_id: impl Into<String>, state: TaskState) -> Self {
        Self {
            status: Some(TaskStatus {
                task_id: task_id.into(),
                state: Some(state.as_str().to_string()),
            }),
            task: None,
        }
    }

    /// Creates a task carrying an arbitrary raw state string.
    ///
    /// Useful for exercising how unrecognized states are handled.
    #[must_use]
    pub fn with_raw_state(task_id: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            status: Some(TaskStatus {
                task_id: task_id.into(),
                state: Some(state.into()),
            }),
            task: None,
        }
    }

    /// Sets the metadata name of the task definition.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.task = Some(TaskDefinition {
            metadata: TaskMetadata { name: name.into() },
        });
        self
    }

    /// Returns the recognized state of this task, if any.
    ///
    /// Missing status blocks, missing states, and unknown state strings all
    /// yield `None`.
    #[must_use]
    pub fn state(&self) -> Option<TaskState> {
        self.status
            .as_ref()
            .and_then(|status| status.state.as_deref())
            .and_then(|state| state.parse().ok())
    }

    /// Returns the task id, or an empty string when the status block is missing.
    #[must_use]
    pub fn task_id(&self) -> &str {
        self.status
            .as_ref()
            .map_or("", |status| status.task_id.as_str())
    }

    /// Returns the task name, falling back to the task id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match &self.task {
            Some(def) if !def.metadata.name.is_empty() => &def.metadata.name,
            _ => self.task_id(),
        }
    }
}
