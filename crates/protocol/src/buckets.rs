//! Classification of tasks into per-state buckets.
//!
//! [`StatusBuckets`] is rebuilt from the full task list every time it is
//! needed; there is no incremental update. Each task lands in at most one
//! bucket and tasks without a recognized state are dropped.

use tracing::debug;

use crate::task::{Task, TaskState};

/// Tasks grouped by state, preserving input order within each bucket.
///
/// # Examples
///
/// ```
/// use tgi_protocol::{StatusBuckets, Task, TaskState};
///
/// let tasks = vec![
///     Task::new("a", TaskState::Completed),
///     Task::new("b", TaskState::Pending),
///     Task::new("c", TaskState::Completed),
/// ];
/// let buckets = StatusBuckets::classify(&tasks);
///
/// assert_eq!(buckets.count(TaskState::Completed), 2);
/// assert_eq!(buckets.count(TaskState::Pending), 1);
/// assert!(!buckets.is_settled());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBuckets<'a> {
    buckets: [Vec<&'a Task>; 6],
}

impl<'a> StatusBuckets<'a> {
    /// Splits `tasks` into the six state buckets.
    #[must_use]
    pub fn classify(tasks: &'a [Task]) -> Self {
        let mut buckets: [Vec<&'a Task>; 6] = Default::default();
        for task in tasks {
            if let Some(state) = task.state() {
                buckets[state.index()].push(task);
            }
        }

        let result = Self { buckets };
        debug!(
            total = tasks.len(),
            classified = result.classified(),
            "classified tasks by state"
        );
        result
    }

    /// Returns the tasks currently in `state`, in input order.
    #[must_use]
    pub fn get(&self, state: TaskState) -> &[&'a Task] {
        &self.buckets[state.index()]
    }

    /// Returns how many tasks are in `state`.
    #[must_use]
    pub fn count(&self, state: TaskState) -> usize {
        self.buckets[state.index()].len()
    }

    /// Returns the per-state counts in display order.
    #[must_use]
    pub fn counts(&self) -> [usize; 6] {
        TaskState::ALL.map(|state| self.count(state))
    }

    /// Returns the number of tasks that landed in any bucket.
    #[must_use]
    pub fn classified(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Returns `true` if no task was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classified() == 0
    }

    /// Returns `true` when no task is unscheduled, running, or pending.
    ///
    /// Whether the build is actually done also depends on the task list
    /// having been retrieved completely, which the buckets cannot know.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        [TaskState::Unscheduled, TaskState::Running, TaskState::Pending]
            .into_iter()
            .all(|state| self.count(state) == 0)
    }

    /// Returns `true` when at least one task is completed, failed, or exception.
    #[must_use]
    pub fn has_terminal(&self) -> bool {
        TaskState::ALL
            .into_iter()
            .filter(|state| state.is_terminal())
            .any(|state| self.count(state) > 0)
    }

    /// Iterates over `(state, tasks)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskState, &[&'a Task])> {
        TaskState::ALL
            .into_iter()
            .map(move |state| (state, self.get(state)))
    }
}
