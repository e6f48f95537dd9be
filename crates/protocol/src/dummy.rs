//! Sample task groups for testing and demonstration.
//!
//! # Examples
//!
//! ```
//! use tgi_protocol::dummy::dummy_snapshot;
//!
//! let snapshot = dummy_snapshot();
//! assert_eq!(snapshot.tasks.len(), 12);
//! assert!(snapshot.retrieved_fully());
//! ```

use crate::snapshot::TaskGroupSnapshot;
use crate::task::{Task, TaskState};

/// Identifier of the sample task group.
pub const DUMMY_TASK_GROUP_ID: &str = "Ab3xQ9PvS7mG1yKq0ZnRtw";

/// Generates a sample task group with a build in progress.
///
/// Distribution:
///
/// - **completed**: 6 tasks
/// - **failed**: 2 tasks
/// - **exception**: 1 task
/// - **unscheduled**: 0 tasks
/// - **running**: 2 tasks
/// - **pending**: 1 task
#[must_use]
pub fn dummy_snapshot() -> TaskGroupSnapshot {
    let tasks = [
        ("decision", TaskState::Completed),
        ("build-linux64/opt", TaskState::Completed),
        ("build-linux64/debug", TaskState::Completed),
        ("build-macosx64/opt", TaskState::Completed),
        ("lint-clippy", TaskState::Completed),
        ("lint-rustfmt", TaskState::Completed),
        ("test-linux64/opt-unit-1", TaskState::Failed),
        ("test-linux64/opt-unit-2", TaskState::Failed),
        ("build-win64/opt", TaskState::Exception),
        ("test-macosx64/opt-unit-1", TaskState::Running),
        ("test-linux64/debug-unit-1", TaskState::Running),
        ("upload-symbols", TaskState::Pending),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, state))| Task::new(format!("task{i:02}"), state).with_name(name))
    .collect();

    TaskGroupSnapshot::new(DUMMY_TASK_GROUP_ID, tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buckets::StatusBuckets;

    #[test]
    fn dummy_distribution() {
        let snapshot = dummy_snapshot();
        let buckets = StatusBuckets::classify(&snapshot.tasks);

        assert_eq!(buckets.counts(), [6, 2, 1, 0, 2, 1]);
        assert!(!buckets.is_settled());
    }
}
