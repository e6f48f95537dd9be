//! Task list widget.
//!
//! Lists the tasks of the active state below the progress bar. Without an
//! active state it shows a hint on how to pick one.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tgi_protocol::{Segment, Task, TaskState};

use super::progress_bar::state_color;

/// Text shown when no state is active.
pub const PICK_STATE_HINT: &str = "Click a segment or press 1-6 to list its tasks";

/// Renders the tasks of `active` (if any) into `area`.
///
/// `scroll` is the number of tasks skipped from the top.
///
/// # Layout
///
/// ```text
/// ┌ Failed (2) ─────────────────────────┐
/// │test-linux64/opt-unit-1  task06      │
/// │test-linux64/opt-unit-2  task07      │
/// └─────────────────────────────────────┘
/// ```
pub fn render_task_list(
    active: Option<TaskState>,
    tasks: &[&Task],
    scroll: usize,
    area: Rect,
    buf: &mut Buffer,
) {
    let Some(state) = active else {
        let hint = Paragraph::new(Span::styled(
            PICK_STATE_HINT,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .block(Block::default().title(" Tasks ").borders(Borders::ALL));
        hint.render(area, buf);
        return;
    };

    let color = state_color(state);
    let title = Segment {
        state,
        count: tasks.len(),
        percent: 0.0,
    }
    .title();
    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let lines: Vec<Line> = if tasks.is_empty() {
        vec![Line::from(Span::styled(
            format!("No {state} tasks"),
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        tasks
            .iter()
            .skip(scroll)
            .map(|task| {
                Line::from(vec![
                    Span::styled(task.display_name(), Style::default().fg(Color::White)),
                    Span::raw("  "),
                    Span::styled(task.task_id(), Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect()
    };

    Paragraph::new(lines).block(block).render(area, buf);
}

/// Largest useful scroll offset for a list of `len` tasks in `area`.
#[must_use]
pub fn max_scroll(len: usize, area: Rect) -> usize {
    let visible = usize::from(area.height.saturating_sub(2));
    len.saturating_sub(visible)
}
