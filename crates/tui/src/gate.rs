//! Build-done notification gate.
//!
//! The gate decides when a task group has just finished. It is armed by
//! seeing the group in progress and fires once when the group is next seen
//! settled with at least one resolved task. Switching to another group
//! disarms it, so opening an already-finished group never notifies.

use tgi_protocol::StatusBuckets;
use tracing::debug;

/// Outcome of evaluating the gate against the current buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyDecision {
    /// The task listing is incomplete; nothing was evaluated.
    Skipped,
    /// Tasks are still unscheduled, running, or pending; the gate is armed.
    InProgress,
    /// The group is settled but no notification is due.
    Settled,
    /// The group just settled; notify the user.
    Notify,
}

/// Per-widget state tracking whether a build-done notification is due.
///
/// # Examples
///
/// ```
/// use tgi_protocol::{StatusBuckets, Task, TaskState};
/// use tgi_tui::gate::{NotificationGate, NotifyDecision};
///
/// let mut gate = NotificationGate::new();
/// gate.observe_group("g1");
///
/// let running = vec![Task::new("a", TaskState::Running)];
/// assert_eq!(gate.check(&StatusBuckets::classify(&running), true), NotifyDecision::InProgress);
///
/// let done = vec![Task::new("a", TaskState::Completed)];
/// assert_eq!(gate.check(&StatusBuckets::classify(&done), true), NotifyDecision::Notify);
/// assert_eq!(gate.check(&StatusBuckets::classify(&done), true), NotifyDecision::Settled);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationGate {
    group: Option<String>,
    armed: bool,
}

impl NotificationGate {
    /// Creates a disarmed gate that has not seen any group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a settle would currently trigger a notification.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns the id of the group the gate is tracking.
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Records the group being displayed, disarming the gate if it changed.
    ///
    /// Returns `true` when the group differs from the previous one.
    pub fn observe_group(&mut self, task_group_id: &str) -> bool {
        if self.group.as_deref() == Some(task_group_id) {
            return false;
        }
        debug!(
            from = ?self.group,
            to = task_group_id,
            "task group changed, disarming notification"
        );
        self.group = Some(task_group_id.to_string());
        self.armed = false;
        true
    }

    /// Evaluates the gate for the current buckets.
    ///
    /// `retrieved_fully` must only be true once every task of the group has
    /// been listed; a partial listing can look settled when it is not.
    pub fn check(&mut self, buckets: &StatusBuckets<'_>, retrieved_fully: bool) -> NotifyDecision {
        if !retrieved_fully {
            return NotifyDecision::Skipped;
        }

        if !buckets.is_settled() {
            self.armed = true;
            return NotifyDecision::InProgress;
        }

        if self.armed && buckets.has_terminal() {
            self.armed = false;
            return NotifyDecision::Notify;
        }

        NotifyDecision::Settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgi_protocol::{Task, TaskState};

    fn tasks(states: &[TaskState]) -> Vec<Task> {
        states
            .iter()
            .enumerate()
            .map(|(i, &state)| Task::new(format!("t{i}"), state))
            .collect()
    }

    use TaskState::{Completed, Exception, Failed, Pending, Running, Unscheduled};

    #[test]
    fn in_progress_arms_the_gate() {
        let mut gate = NotificationGate::new();
        gate.observe_group("g1");

        let t = tasks(&[Completed, Completed, Failed, Pending]);
        let decision = gate.check(&StatusBuckets::classify(&t), true);

        assert_eq!(decision, NotifyDecision::InProgress);
        assert!(gate.is_armed());
    }

    #[test]
    fn settle_after_progress_notifies_once() {
        let mut gate = NotificationGate::new();
        gate.observe_group("g1");

        let t = tasks(&[Completed, Completed, Failed, Pending]);
        gate.check(&StatusBuckets::classify(&t), true);

        let t = tasks(&[Completed, Completed, Failed, Completed]);
        assert_eq!(
            gate.check(&StatusBuckets::classify(&t), true),
            NotifyDecision::Notify
        );
        assert!(!gate.is_armed());
        assert_eq!(
            gate.check(&StatusBuckets::classify(&t), true),
            NotifyDecision::Settled
        );
    }

    #[test]
    fn already_finished_group_never_notifies() {
        let mut gate = NotificationGate::new();
        gate.observe_group("g1");
        let t = tasks(&[Running]);
        gate.check(&StatusBuckets::classify(&t), true);
        assert!(gate.is_armed());

        assert!(gate.observe_group("g2"));
        assert!(!gate.is_armed());

        let t = tasks(&[Completed, Exception]);
        assert_eq!(
            gate.check(&StatusBuckets::classify(&t), true),
            NotifyDecision::Settled
        );
    }

    #[test]
    fn same_group_keeps_arming() {
        let mut gate = NotificationGate::new();
        assert!(gate.observe_group("g1"));
        let t = tasks(&[Unscheduled]);
        gate.check(&StatusBuckets::classify(&t), true);

        assert!(!gate.observe_group("g1"));
        assert!(gate.is_armed());
    }

    #[test]
    fn partial_listing_is_not_evaluated() {
        let mut gate = NotificationGate::new();
        gate.observe_group("g1");

        let t = tasks(&[Pending]);
        assert_eq!(
            gate.check(&StatusBuckets::classify(&t), false),
            NotifyDecision::Skipped
        );
        assert!(!gate.is_armed());
    }

    #[test]
    fn partial_listing_does_not_fire_armed_gate() {
        let mut gate = NotificationGate::new();
        gate.observe_group("g1");
        gate.check(&StatusBuckets::classify(&tasks(&[Running])), true);

        let t = tasks(&[Completed]);
        assert_eq!(
            gate.check(&StatusBuckets::classify(&t), false),
            NotifyDecision::Skipped
        );
        assert!(gate.is_armed());
    }

    #[test]
    fn settled_without_resolved_tasks_stays_armed() {
        let mut gate = NotificationGate::new();
        gate.observe_group("g1");
        gate.check(&StatusBuckets::classify(&tasks(&[Running])), true);

        let unknown = vec![Task::with_raw_state("x", "mystery")];
        assert_eq!(
            gate.check(&StatusBuckets::classify(&unknown), true),
            NotifyDecision::Settled
        );
        assert!(gate.is_armed());
    }
}
