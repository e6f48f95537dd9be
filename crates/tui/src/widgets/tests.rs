//! Rendering tests across widgets, driven by the sample task group.

use ratatui::{buffer::Buffer, layout::Rect};
use tgi_protocol::dummy::dummy_snapshot;
use tgi_protocol::{Segment, StatusBuckets, TaskState, segment_percentages};

use super::{render_legend, render_progress_panel, render_status_bar, render_task_list};
use crate::test_utils::buffer_to_string;
use crate::widgets::GroupSummary;

fn dummy_segments() -> [Segment; 6] {
    let snapshot = dummy_snapshot();
    let buckets = StatusBuckets::classify(&snapshot.tasks);
    segment_percentages(&buckets, snapshot.tasks.len(), 5.0)
}

#[test]
fn snapshot_progress_panel_dummy_group() {
    let area = Rect::new(0, 0, 62, 3);
    let mut buf = Buffer::empty(area);

    render_progress_panel(&dummy_segments(), area, &mut buf).unwrap();

    insta::assert_snapshot!(buffer_to_string(&buf));
}

#[test]
fn snapshot_failed_task_list() {
    let snapshot = dummy_snapshot();
    let buckets = StatusBuckets::classify(&snapshot.tasks);
    let area = Rect::new(0, 0, 40, 4);
    let mut buf = Buffer::empty(area);

    render_task_list(
        Some(TaskState::Failed),
        buckets.get(TaskState::Failed),
        0,
        area,
        &mut buf,
    );

    insta::assert_snapshot!(buffer_to_string(&buf));
}

#[test]
fn panel_layout_maps_every_visible_segment() {
    let area = Rect::new(0, 0, 62, 3);
    let mut buf = Buffer::empty(area);

    let layout = render_progress_panel(&dummy_segments(), area, &mut buf).unwrap();

    assert_eq!(layout.area, Rect::new(1, 1, 60, 1));
    let widths: Vec<u16> = layout.segments.iter().map(|s| s.area.width).collect();
    assert_eq!(widths, [30, 10, 5, 10, 5]);

    assert_eq!(layout.status_at(15, 1), Some(TaskState::Completed));
    assert_eq!(layout.status_at(34, 1), Some(TaskState::Failed));
    assert_eq!(layout.status_at(42, 1), Some(TaskState::Exception));
    assert_eq!(layout.status_at(50, 1), Some(TaskState::Running));
    assert_eq!(layout.status_at(57, 1), Some(TaskState::Pending));
    assert_eq!(layout.status_at(0, 1), None);
    assert_eq!(layout.status_at(15, 0), None);
}

#[test]
fn empty_group_hides_panel() {
    let tasks = Vec::new();
    let buckets = StatusBuckets::classify(&tasks);
    let segments = segment_percentages(&buckets, 0, 5.0);
    let area = Rect::new(0, 0, 30, 3);
    let mut buf = Buffer::empty(area);

    assert!(render_progress_panel(&segments, area, &mut buf).is_none());
    assert_eq!(buffer_to_string(&buf), "\n\n\n");
}

#[test]
fn legend_and_status_bar_fit_standard_width() {
    let snapshot = dummy_snapshot();
    let area = Rect::new(0, 0, 80, 4);
    let mut buf = Buffer::empty(area);

    render_legend(Rect::new(0, 0, 80, 1), &mut buf);
    render_status_bar(
        Some(GroupSummary {
            task_group_id: &snapshot.task_group_id,
            total_tasks: snapshot.tasks.len(),
            retrieved_fully: snapshot.retrieved_fully(),
        }),
        None,
        Rect::new(0, 1, 80, 3),
        &mut buf,
    );

    let content = buffer_to_string(&buf);
    assert!(content.starts_with("■ completed  ■ failed"));
    assert!(content.contains("Ab3xQ9PvS7mG1yKq0ZnRtw · 12 tasks · complete"));
}
