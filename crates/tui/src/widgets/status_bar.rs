//! Status bar rendering widget.
//!
//! The footer shows which task group is displayed, whether its listing is
//! complete, the last reload error (if any), and keybinding hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// What the status bar reports about the current task group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSummary<'a> {
    pub task_group_id: &'a str,
    pub total_tasks: usize,
    pub retrieved_fully: bool,
}

/// Renders the status bar.
///
/// # Layout
///
/// ```text
/// +--------------------------------------------------------------+
/// | g1 · 12 tasks · complete  |  ? Help  r Reload  Ctrl+C Quit   |
/// +--------------------------------------------------------------+
/// ```
pub fn render_status_bar(
    summary: Option<GroupSummary<'_>>,
    message: Option<&str>,
    area: Rect,
    buf: &mut Buffer,
) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::new();
    match summary {
        Some(summary) => {
            spans.push(Span::styled(
                summary.task_group_id.to_string(),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::styled(
                format!(" · {} tasks · ", summary.total_tasks),
                text_style,
            ));
            if summary.retrieved_fully {
                spans.push(Span::styled("complete", text_style));
            } else {
                spans.push(Span::styled("partial", key_style));
            }
        }
        None => spans.push(Span::styled("no task group", dim_style)),
    }

    if let Some(message) = message {
        spans.push(Span::styled("  |  ", text_style));
        spans.push(Span::styled(message.to_string(), Style::default().fg(Color::Red)));
    }

    spans.extend([
        Span::styled("  |  ", text_style),
        Span::styled("?", key_style),
        Span::styled(" Help  ", text_style),
        Span::styled("r", key_style),
        Span::styled(" Reload  ", text_style),
        Span::styled("Ctrl+C", key_style),
        Span::styled(" Quit", text_style),
    ]);

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}
