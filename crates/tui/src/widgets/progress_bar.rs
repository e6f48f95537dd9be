//! Segmented progress bar widget.
//!
//! Draws one colored segment per task state, left to right in display
//! order, with a short label such as `C(12)` centered in each. Rendering
//! returns a [`ProgressBarLayout`] recording where each segment landed and
//! which label text actually fit, so clicks can be resolved against exactly
//! what the user sees.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};
use tgi_protocol::{Segment, TaskState, status_from_label};

/// Returns the color used for a state in the bar and the legend.
///
/// | State | Color |
/// |-------|-------|
/// | `Completed` | Green |
/// | `Failed` | Red |
/// | `Exception` | Yellow |
/// | `Unscheduled` | Gray |
/// | `Running` | Blue |
/// | `Pending` | Cyan |
#[must_use]
pub fn state_color(state: TaskState) -> Color {
    match state {
        TaskState::Completed => Color::Green,
        TaskState::Failed => Color::Red,
        TaskState::Exception => Color::Yellow,
        TaskState::Unscheduled => Color::Gray,
        TaskState::Running => Color::Blue,
        TaskState::Pending => Color::Cyan,
    }
}

/// Style of a segment's cells. Running segments blink to mark activity.
#[must_use]
pub fn segment_style(state: TaskState) -> Style {
    let style = Style::default().bg(state_color(state)).fg(Color::Black);
    if state == TaskState::Running {
        style.fg(Color::White).add_modifier(Modifier::SLOW_BLINK)
    } else {
        style
    }
}

/// Where one segment was drawn and what its label reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentArea {
    /// State the segment stands for.
    pub state: TaskState,
    /// Cells covered by the segment.
    pub area: Rect,
    /// Label text as drawn, possibly truncated to the segment width.
    pub label: String,
}

/// The result of rendering the bar, used for click hit-testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressBarLayout {
    /// Area the bar was drawn into.
    pub area: Rect,
    /// Segments with a nonzero width, left to right.
    pub segments: Vec<SegmentArea>,
}

impl ProgressBarLayout {
    /// Returns the segment under the given cell, if any.
    #[must_use]
    pub fn segment_at(&self, column: u16, row: u16) -> Option<&SegmentArea> {
        let position = Position::new(column, row);
        self.segments
            .iter()
            .find(|segment| segment.area.contains(position))
    }

    /// Resolves a click to a state by reading the clicked segment's label.
    ///
    /// Clicks outside the bar, or on a segment whose label does not name a
    /// state (the `...` of an empty bucket, or a label truncated away),
    /// resolve to nothing.
    #[must_use]
    pub fn status_at(&self, column: u16, row: u16) -> Option<TaskState> {
        self.segment_at(column, row)
            .and_then(|segment| status_from_label(&segment.label))
    }
}

/// Splits `width` columns between segments in proportion to `percents`.
///
/// Uses largest remainders so the columns always add up to `width`, and
/// gives every nonzero segment at least one column when some other
/// segment can spare it.
#[must_use]
pub fn allocate_columns(percents: &[f64], width: u16) -> Vec<u16> {
    let total: f64 = percents.iter().sum();
    if width == 0 || total <= 0.0 {
        return vec![0; percents.len()];
    }

    let exact: Vec<f64> = percents
        .iter()
        .map(|p| p / total * f64::from(width))
        .collect();
    let mut columns: Vec<u16> = exact.iter().map(|e| e.floor() as u16).collect();
    let mut remaining = width.saturating_sub(columns.iter().sum());

    let mut by_remainder: Vec<usize> = (0..exact.len()).filter(|&i| exact[i] > 0.0).collect();
    by_remainder.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.total_cmp(&ra)
    });
    for &i in by_remainder.iter().cycle().take(by_remainder.len() * 2) {
        if remaining == 0 {
            break;
        }
        columns[i] += 1;
        remaining -= 1;
    }

    for i in 0..columns.len() {
        if exact[i] > 0.0 && columns[i] == 0 {
            let widest = (0..columns.len())
                .filter(|&j| columns[j] > 1)
                .max_by_key(|&j| columns[j]);
            if let Some(j) = widest {
                columns[j] -= 1;
                columns[i] = 1;
            }
        }
    }

    columns
}

/// Renders the segmented bar into `area`.
///
/// Returns `None` and draws nothing when no segment has any task, which is
/// how an empty task group stays hidden.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tgi_protocol::{StatusBuckets, Task, TaskState, segment_percentages};
/// use tgi_tui::widgets::render_progress_bar;
///
/// let tasks = vec![Task::new("a", TaskState::Completed), Task::new("b", TaskState::Failed)];
/// let buckets = StatusBuckets::classify(&tasks);
/// let segments = segment_percentages(&buckets, tasks.len(), 5.0);
///
/// let area = Rect::new(0, 0, 20, 1);
/// let mut buf = Buffer::empty(area);
/// let layout = render_progress_bar(&segments, area, &mut buf).unwrap();
///
/// assert_eq!(layout.status_at(2, 0), Some(TaskState::Completed));
/// ```
pub fn render_progress_bar(
    segments: &[Segment],
    area: Rect,
    buf: &mut Buffer,
) -> Option<ProgressBarLayout> {
    if area.is_empty() || segments.iter().all(|segment| segment.count == 0) {
        return None;
    }

    let percents: Vec<f64> = segments.iter().map(|segment| segment.percent).collect();
    let columns = allocate_columns(&percents, area.width);
    let label_row = area.y + area.height / 2;

    let mut layout = ProgressBarLayout {
        area,
        segments: Vec::new(),
    };
    let mut x = area.x;
    for (segment, width) in segments.iter().zip(columns) {
        if width == 0 {
            continue;
        }
        let segment_area = Rect::new(x, area.y, width, area.height);
        let style = segment_style(segment.state);
        Clear.render(segment_area, buf);
        buf.set_style(segment_area, style);

        let label: String = segment.label().chars().take(usize::from(width)).collect();
        let offset = (width - label.len() as u16) / 2;
        buf.set_string(x + offset, label_row, &label, style);

        layout.segments.push(SegmentArea {
            state: segment.state,
            area: segment_area,
            label,
        });
        x += width;
    }

    Some(layout)
}

/// Renders the bar inside a bordered " Progress " panel.
///
/// Like [`render_progress_bar`], draws nothing (not even the border) when
/// the task group has no classified task.
pub fn render_progress_panel(
    segments: &[Segment],
    area: Rect,
    buf: &mut Buffer,
) -> Option<ProgressBarLayout> {
    if segments.iter().all(|segment| segment.count == 0) {
        return None;
    }
    let block = Block::default().title(" Progress ").borders(Borders::ALL);
    let inner = block.inner(area);
    block.render(area, buf);
    render_progress_bar(segments, inner, buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use tgi_protocol::{StatusBuckets, Task, segment_percentages};

    fn segments_for(states: &[TaskState]) -> Vec<Segment> {
        let tasks: Vec<Task> = states.iter().map(|&s| Task::new("t", s)).collect();
        let buckets = StatusBuckets::classify(&tasks);
        segment_percentages(&buckets, tasks.len(), 5.0).to_vec()
    }

    #[test]
    fn allocate_proportional() {
        assert_eq!(
            allocate_columns(&[50.0, 25.0, 0.0, 0.0, 0.0, 25.0], 20),
            [10, 5, 0, 0, 0, 5]
        );
    }

    #[test]
    fn allocate_distributes_remainders() {
        let columns = allocate_columns(&[100.0 / 3.0; 3], 10);
        assert_eq!(columns.iter().sum::<u16>(), 10);
        assert_eq!(columns, [4, 3, 3]);
    }

    #[test]
    fn allocate_keeps_small_segments_visible() {
        let columns = allocate_columns(&[97.0, 3.0], 10);
        assert_eq!(columns, [9, 1]);

        let columns = allocate_columns(&[98.0, 1.0, 1.0], 10);
        assert_eq!(columns.iter().sum::<u16>(), 10);
        assert!(columns.iter().all(|&c| c >= 1));
    }

    #[test]
    fn allocate_zero_width() {
        assert_eq!(allocate_columns(&[50.0, 50.0], 0), [0, 0]);
        assert_eq!(allocate_columns(&[0.0, 0.0], 10), [0, 0]);
    }

    #[test]
    fn render_draws_centered_labels() {
        use TaskState::{Completed, Failed, Pending};
        let segments = segments_for(&[Completed, Completed, Failed, Pending]);
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);

        let layout = render_progress_bar(&segments, area, &mut buf).unwrap();

        assert_eq!(buffer_to_string(&buf), "   C(2)   F(1) P(1)\n");
        let states: Vec<TaskState> = layout.segments.iter().map(|s| s.state).collect();
        assert_eq!(states, [Completed, Failed, Pending]);
        assert_eq!(layout.segments[1].area, Rect::new(10, 0, 5, 1));
    }

    #[test]
    fn render_colors_segments() {
        let segments = segments_for(&[TaskState::Completed, TaskState::Failed]);
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);

        render_progress_bar(&segments, area, &mut buf).unwrap();

        assert_eq!(buf[(0, 0)].bg, Color::Green);
        assert_eq!(buf[(9, 0)].bg, Color::Red);
    }

    #[test]
    fn empty_group_renders_nothing() {
        let segments = segments_for(&[]);
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);

        assert!(render_progress_bar(&segments, area, &mut buf).is_none());
        assert_eq!(buffer_to_string(&buf), "\n");
    }

    #[test]
    fn click_resolves_segment_state() {
        let segments = segments_for(&[
            TaskState::Completed,
            TaskState::Exception,
            TaskState::Unscheduled,
            TaskState::Running,
        ]);
        let area = Rect::new(2, 5, 40, 1);
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 10));
        let layout = render_progress_bar(&segments, area, &mut buf).unwrap();

        for segment in &layout.segments {
            let column = segment.area.x + segment.area.width / 2;
            assert_eq!(layout.status_at(column, 5), Some(segment.state));
        }
        assert_eq!(layout.status_at(1, 5), None);
        assert_eq!(layout.status_at(10, 6), None);
    }

    #[test]
    fn click_on_truncated_label_uses_visible_text() {
        let layout = ProgressBarLayout {
            area: Rect::new(0, 0, 3, 1),
            segments: vec![
                SegmentArea {
                    state: TaskState::Pending,
                    area: Rect::new(0, 0, 1, 1),
                    label: "P".to_string(),
                },
                SegmentArea {
                    state: TaskState::Failed,
                    area: Rect::new(1, 0, 2, 1),
                    label: String::new(),
                },
            ],
        };

        assert_eq!(layout.status_at(0, 0), Some(TaskState::Pending));
        assert_eq!(layout.status_at(1, 0), None);
    }

    #[test]
    fn taller_bar_puts_label_on_middle_row() {
        let segments = segments_for(&[TaskState::Running]);
        let area = Rect::new(0, 0, 8, 3);
        let mut buf = Buffer::empty(area);

        render_progress_bar(&segments, area, &mut buf).unwrap();

        assert_eq!(buffer_to_string(&buf), "\n  R(1)\n\n");
    }
}
