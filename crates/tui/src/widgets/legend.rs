//! Legend widget: one color swatch and name per task state.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tgi_protocol::TaskState;

use super::progress_bar::state_color;

/// Builds the legend line, states in display order.
#[must_use]
pub fn legend_line() -> Line<'static> {
    let text_style = Style::default().fg(Color::White);
    let mut spans = Vec::with_capacity(TaskState::ALL.len() * 3);
    for (i, state) in TaskState::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("■ ", Style::default().fg(state_color(state))));
        spans.push(Span::styled(state.as_str(), text_style));
    }
    Line::from(spans)
}

/// Renders the legend into `area`.
///
/// # Layout
///
/// ```text
/// ■ completed  ■ failed  ■ exception  ■ unscheduled  ■ running  ■ pending
/// ```
pub fn render_legend(area: Rect, buf: &mut Buffer) {
    Paragraph::new(legend_line()).render(area, buf);
}
