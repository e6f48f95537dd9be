//! Progress bar segment sizing and labelling.
//!
//! Each state gets one segment whose width is its share of the task group.
//! Small but nonzero shares are raised to a floor so they stay visible and
//! clickable, then all shares are rescaled to sum to 100. The result is a
//! deliberately distorted picture, not an accurate proportion.

use crate::buckets::StatusBuckets;
use crate::task::TaskState;

/// Label shown on a segment whose bucket is empty.
pub const EMPTY_SEGMENT_LABEL: &str = "...";

/// Order in which states are tried when mapping label text back to a state.
const CLICK_MATCH_ORDER: [TaskState; 6] = [
    TaskState::Failed,
    TaskState::Completed,
    TaskState::Running,
    TaskState::Pending,
    TaskState::Exception,
    TaskState::Unscheduled,
];

/// One segment of the progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// The state this segment represents.
    pub state: TaskState,
    /// Number of tasks in the state.
    pub count: usize,
    /// Width of the segment in percent of the whole bar.
    pub percent: f64,
}

impl Segment {
    /// Short label drawn inside the segment, e.g. `"C(2)"` or `"..."`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tgi_protocol::{Segment, TaskState};
    ///
    /// let segment = Segment { state: TaskState::Failed, count: 3, percent: 30.0 };
    /// assert_eq!(segment.label(), "F(3)");
    /// assert_eq!(segment.title(), "Failed (3)");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        if self.count == 0 {
            return EMPTY_SEGMENT_LABEL.to_string();
        }
        let initial = &self.state.display_name()[..1];
        format!("{initial}({})", self.count)
    }

    /// Long title of the segment, e.g. `"Completed (2)"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} ({})", self.state.display_name(), self.count)
    }
}

/// Computes the six segments of the bar in display order.
///
/// `total` is the length of the full task list, including tasks whose state
/// was not recognized. `min_percent` is the floor applied to nonzero shares.
/// When `total` is zero or nothing was classified, every segment is zero
/// wide; callers hide the bar in that case.
///
/// # Examples
///
/// ```
/// use tgi_protocol::{StatusBuckets, Task, TaskState, segment_percentages};
///
/// let mut tasks = vec![Task::new("f", TaskState::Failed)];
/// tasks.extend((0..99).map(|i| Task::new(i.to_string(), TaskState::Completed)));
/// let buckets = StatusBuckets::classify(&tasks);
///
/// let segments = segment_percentages(&buckets, tasks.len(), 5.0);
/// let sum: f64 = segments.iter().map(|s| s.percent).sum();
/// assert!((sum - 100.0).abs() < 1e-9);
/// // 1% of failures was raised to 5 before renormalizing.
/// assert!((segments[1].percent - 5.0 / 104.0 * 100.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn segment_percentages(
    buckets: &StatusBuckets<'_>,
    total: usize,
    min_percent: f64,
) -> [Segment; 6] {
    let raw = TaskState::ALL.map(|state| {
        let count = buckets.count(state);
        let percent = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        };
        let percent = if percent > 0.0 && percent < min_percent {
            min_percent
        } else {
            percent
        };
        Segment {
            state,
            count,
            percent,
        }
    });

    let weighted_total: f64 = raw.iter().map(|segment| segment.percent).sum();
    raw.map(|segment| Segment {
        percent: if weighted_total > 0.0 {
            segment.percent / weighted_total * 100.0
        } else {
            0.0
        },
        ..segment
    })
}

/// Maps the text rendered on a segment back to a state.
///
/// The text is lowercased and the first state (in the order failed,
/// completed, running, pending, exception, unscheduled) whose initial
/// letter occurs anywhere in it wins. The empty-segment label `"..."`
/// matches nothing.
///
/// # Examples
///
/// ```
/// use tgi_protocol::{TaskState, status_from_label};
///
/// assert_eq!(status_from_label("C(2)"), Some(TaskState::Completed));
/// assert_eq!(status_from_label("U(1)"), Some(TaskState::Unscheduled));
/// assert_eq!(status_from_label("..."), None);
/// ```
#[must_use]
pub fn status_from_label(text: &str) -> Option<TaskState> {
    let text = text.to_lowercase();
    CLICK_MATCH_ORDER.into_iter().find(|state| {
        state
            .as_str()
            .chars()
            .next()
            .is_some_and(|initial| text.contains(initial))
    })
}
