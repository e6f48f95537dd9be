//! Application state.
//!
//! [`ProgressBarState`] is the per-widget state of the progress bar (its
//! notification gate), fed each render with [`ProgressBarProps`]. [`AppState`]
//! owns it together with the loaded snapshot and the UI selection.

use tgi_protocol::{
    Segment, StatusBuckets, Task, TaskGroupSnapshot, TaskState, segment_percentages,
};

use crate::gate::{NotificationGate, NotifyDecision};
use crate::widgets::GroupSummary;

/// Inputs the progress bar is rendered from.
#[derive(Debug, Clone, Copy)]
pub struct ProgressBarProps<'a> {
    /// Group the tasks belong to. A change disarms the notification gate.
    pub task_group_id: &'a str,
    /// Every listed task, including those with no recognized state.
    pub tasks: &'a [Task],
    /// `false` while more pages of tasks remain to be listed.
    pub tasks_retrieved_fully: bool,
}

impl<'a> ProgressBarProps<'a> {
    #[must_use]
    pub fn from_snapshot(snapshot: &'a TaskGroupSnapshot) -> Self {
        Self {
            task_group_id: &snapshot.task_group_id,
            tasks: &snapshot.tasks,
            tasks_retrieved_fully: snapshot.retrieved_fully(),
        }
    }

    /// Classifies the tasks by state.
    #[must_use]
    pub fn buckets(&self) -> StatusBuckets<'a> {
        StatusBuckets::classify(self.tasks)
    }

    /// Segment widths for the bar, using `min_percent` as the segment floor.
    #[must_use]
    pub fn segments(&self, min_percent: f64) -> [Segment; 6] {
        segment_percentages(&self.buckets(), self.tasks.len(), min_percent)
    }
}

/// State the progress bar keeps between renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressBarState {
    gate: NotificationGate,
}

impl ProgressBarState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn gate(&self) -> &NotificationGate {
        &self.gate
    }

    /// Feeds one render's props to the notification gate.
    ///
    /// The group is observed before the gate is checked, so a render that
    /// switches to another group can never fire the previous group's
    /// notification.
    pub fn evaluate(&mut self, props: &ProgressBarProps<'_>) -> NotifyDecision {
        self.gate.observe_group(props.task_group_id);
        self.gate.check(&props.buckets(), props.tasks_retrieved_fully)
    }
}

/// The application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Last successfully loaded task group.
    pub snapshot: Option<TaskGroupSnapshot>,
    pub progress: ProgressBarState,
    /// State whose tasks are listed below the bar.
    pub active_status: Option<TaskState>,
    /// Number of tasks scrolled past at the top of the list.
    pub list_scroll: usize,
    pub help_visible: bool,
    /// Last reload error, cleared by the next successful load.
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates an empty state with no task group loaded.
    ///
    /// # Examples
    ///
    /// ```
    /// use tgi_tui::AppState;
    ///
    /// let state = AppState::new();
    /// assert!(state.snapshot.is_none());
    /// assert!(state.active_status.is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the displayed task group and evaluates the notification gate.
    ///
    /// Switching to a different group also clears the active state and the
    /// list scroll, since they referred to the old group's tasks.
    pub fn apply_snapshot(&mut self, snapshot: TaskGroupSnapshot) -> NotifyDecision {
        let group_changed = self
            .snapshot
            .as_ref()
            .is_none_or(|current| current.task_group_id != snapshot.task_group_id);
        if group_changed {
            self.active_status = None;
            self.list_scroll = 0;
        }

        let decision = self
            .progress
            .evaluate(&ProgressBarProps::from_snapshot(&snapshot));
        self.snapshot = Some(snapshot);
        self.status_message = None;
        self.list_scroll = self.list_scroll.min(self.active_tasks().len().saturating_sub(1));
        decision
    }

    #[must_use]
    pub fn props(&self) -> Option<ProgressBarProps<'_>> {
        self.snapshot.as_ref().map(ProgressBarProps::from_snapshot)
    }

    /// Summary for the status bar, if a group is loaded.
    #[must_use]
    pub fn summary(&self) -> Option<GroupSummary<'_>> {
        self.props().map(|props| GroupSummary {
            task_group_id: props.task_group_id,
            total_tasks: props.tasks.len(),
            retrieved_fully: props.tasks_retrieved_fully,
        })
    }

    /// Tasks in the active state, in listing order.
    #[must_use]
    pub fn active_tasks(&self) -> Vec<&Task> {
        match (self.active_status, self.props()) {
            (Some(state), Some(props)) => props.buckets().get(state).to_vec(),
            _ => Vec::new(),
        }
    }

    /// Shows the tasks of `state`, starting from the top of the list.
    pub fn set_active_status(&mut self, state: TaskState) {
        if self.active_status != Some(state) {
            self.active_status = Some(state);
            self.list_scroll = 0;
        }
    }

    /// Clears the active state.
    ///
    /// Returns `true` if a state was active.
    pub fn clear_active_status(&mut self) -> bool {
        self.list_scroll = 0;
        self.active_status.take().is_some()
    }

    pub fn scroll_up(&mut self) {
        self.list_scroll = self.list_scroll.saturating_sub(1);
    }

    /// Scrolls one task down, never past `max`.
    pub fn scroll_down(&mut self, max: usize) {
        self.list_scroll = (self.list_scroll + 1).min(max);
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Hides the help overlay, returning `true` if it was shown.
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgi_protocol::dummy::dummy_snapshot;

    fn snapshot(id: &str, states: &[TaskState]) -> TaskGroupSnapshot {
        let tasks = states
            .iter()
            .enumerate()
            .map(|(i, &state)| Task::new(format!("t{i}"), state))
            .collect();
        TaskGroupSnapshot::new(id, tasks)
    }

    #[test]
    fn new_state_is_empty() {
        let state = AppState::new();
        assert!(state.snapshot.is_none());
        assert!(state.summary().is_none());
        assert!(state.active_tasks().is_empty());
        assert!(!state.help_visible);
        assert!(!state.progress.gate().is_armed());
    }

    #[test]
    fn props_reflect_snapshot() {
        let mut snapshot = dummy_snapshot();
        snapshot.continuation_token = Some("next".to_string());
        let props = ProgressBarProps::from_snapshot(&snapshot);

        assert_eq!(props.tasks.len(), 12);
        assert!(!props.tasks_retrieved_fully);
        assert_eq!(props.buckets().counts(), [6, 2, 1, 0, 2, 1]);
        let total: f64 = props.segments(5.0).iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn active_tasks_follow_selected_state() {
        let mut state = AppState::new();
        state.apply_snapshot(dummy_snapshot());

        state.set_active_status(TaskState::Failed);
        let ids: Vec<&str> = state.active_tasks().iter().map(|t| t.task_id()).collect();
        assert_eq!(ids, ["task06", "task07"]);

        state.set_active_status(TaskState::Unscheduled);
        assert!(state.active_tasks().is_empty());
    }

    #[test]
    fn selecting_another_state_resets_scroll() {
        let mut state = AppState::new();
        state.apply_snapshot(dummy_snapshot());
        state.set_active_status(TaskState::Completed);
        state.scroll_down(5);
        state.scroll_down(5);
        assert_eq!(state.list_scroll, 2);

        state.set_active_status(TaskState::Completed);
        assert_eq!(state.list_scroll, 2);

        state.set_active_status(TaskState::Running);
        assert_eq!(state.list_scroll, 0);
    }

    #[test]
    fn scrolling_is_bounded() {
        let mut state = AppState::new();
        state.scroll_up();
        assert_eq!(state.list_scroll, 0);

        for _ in 0..10 {
            state.scroll_down(3);
        }
        assert_eq!(state.list_scroll, 3);
    }

    #[test]
    fn clear_active_status_reports_change() {
        let mut state = AppState::new();
        assert!(!state.clear_active_status());

        state.set_active_status(TaskState::Pending);
        assert!(state.clear_active_status());
        assert!(state.active_status.is_none());
    }

    #[test]
    fn switching_group_resets_selection() {
        let mut state = AppState::new();
        state.apply_snapshot(snapshot("g1", &[TaskState::Completed, TaskState::Completed]));
        state.set_active_status(TaskState::Completed);
        state.scroll_down(1);

        state.apply_snapshot(snapshot("g1", &[TaskState::Completed, TaskState::Completed]));
        assert_eq!(state.active_status, Some(TaskState::Completed));
        assert_eq!(state.list_scroll, 1);

        state.apply_snapshot(snapshot("g2", &[TaskState::Completed]));
        assert_eq!(state.active_status, None);
        assert_eq!(state.list_scroll, 0);
    }

    #[test]
    fn reload_clamps_scroll_to_shrunken_list() {
        let mut state = AppState::new();
        state.apply_snapshot(snapshot("g1", &[TaskState::Running; 4]));
        state.set_active_status(TaskState::Running);
        state.scroll_down(3);
        state.scroll_down(3);
        state.scroll_down(3);

        state.apply_snapshot(snapshot(
            "g1",
            &[TaskState::Running, TaskState::Completed, TaskState::Completed],
        ));
        assert_eq!(state.list_scroll, 0);
    }

    #[test]
    fn successful_load_clears_message() {
        let mut state = AppState::new();
        state.status_message = Some("boom".to_string());
        state.apply_snapshot(dummy_snapshot());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn apply_snapshot_drives_gate() {
        let mut state = AppState::new();
        assert_eq!(
            state.apply_snapshot(snapshot("g1", &[TaskState::Pending])),
            NotifyDecision::InProgress
        );
        assert_eq!(
            state.apply_snapshot(snapshot("g1", &[TaskState::Completed])),
            NotifyDecision::Notify
        );
        assert_eq!(
            state.apply_snapshot(snapshot("g1", &[TaskState::Completed])),
            NotifyDecision::Settled
        );
    }

    #[test]
    fn already_finished_group_does_not_notify() {
        let mut state = AppState::new();
        state.apply_snapshot(snapshot("g1", &[TaskState::Running]));
        assert!(state.progress.gate().is_armed());

        assert_eq!(
            state.apply_snapshot(snapshot("g2", &[TaskState::Failed])),
            NotifyDecision::Settled
        );
    }

    #[test]
    fn help_toggle_and_dismiss() {
        let mut state = AppState::new();
        assert!(!state.dismiss_help());

        state.toggle_help();
        assert!(state.help_visible);
        assert!(state.dismiss_help());
        assert!(!state.help_visible);
    }
}
