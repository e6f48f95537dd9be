//! Task group snapshots.
//!
//! A snapshot is one page of the queue's task group listing, saved as JSON:
//!
//! ```json
//! {
//!   "taskGroupId": "dSlITZ4yQgmvxxAi4A8fHQ",
//!   "tasks": [ { "status": { "taskId": "a1", "state": "completed" } } ],
//!   "continuationToken": null
//! }
//! ```
//!
//! A listing is complete when it carries no continuation token.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::{ProtocolError, Result};
use crate::task::Task;

/// The tasks of one task group, as last retrieved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskGroupSnapshot {
    /// Identifier of the task group.
    pub task_group_id: String,
    /// Tasks in listing order.
    #[serde(default, deserialize_with = "tasks_lenient")]
    pub tasks: Vec<Task>,
    /// Present when more pages remain to be fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
}

/// Reads the task array, turning entries that are not task objects into
/// empty tasks. They still count toward the total but join no bucket.
fn tasks_lenient<'de, D>(deserializer: D) -> std::result::Result<Vec<Task>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|entry| Task::deserialize(entry).unwrap_or_default())
        .collect())
}

impl TaskGroupSnapshot {
    /// Creates a complete snapshot from a list of tasks.
    #[must_use]
    pub fn new(task_group_id: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            task_group_id: task_group_id.into(),
            tasks,
            continuation_token: None,
        }
    }

    /// Parses a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the task group id is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tgi_protocol::TaskGroupSnapshot;
    ///
    /// let snapshot = TaskGroupSnapshot::from_json(
    ///     r#"{"taskGroupId": "g1", "tasks": [], "continuationToken": "next"}"#,
    /// ).unwrap();
    /// assert_eq!(snapshot.task_group_id, "g1");
    /// assert!(!snapshot.retrieved_fully());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(ProtocolError::DeserializationFailed)?;
        if snapshot.task_group_id.is_empty() {
            return Err(ProtocolError::MissingTaskGroupId);
        }
        Ok(snapshot)
    }

    /// Reads and parses a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(?path, "loading task group snapshot");
        let content = std::fs::read_to_string(path).map_err(|e| ProtocolError::ReadSnapshot {
            path: path.to_path_buf(),
            source: e,
        })?;
        let snapshot = Self::from_json(&content)?;
        debug!(
            task_group_id = %snapshot.task_group_id,
            tasks = snapshot.tasks.len(),
            retrieved_fully = snapshot.retrieved_fully(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Returns `true` when every page of the listing has been retrieved.
    #[must_use]
    pub fn retrieved_fully(&self) -> bool {
        self.continuation_token.is_none()
    }
}
