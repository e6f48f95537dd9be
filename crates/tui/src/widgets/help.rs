//! Help overlay widget.
//!
//! Lists every keybinding in a centered popup when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

const HELP_WIDTH: u16 = 38;

/// Keybindings grouped by section: `(section, [(key, action)])`.
const BINDINGS: [(&str, &[(&str, &str)]); 2] = [
    (
        "Task states",
        &[
            ("1-6", "Show completed … pending"),
            ("Click", "Show the clicked segment"),
            ("↑ ↓", "Scroll task list"),
            ("0 / Esc", "Clear selection"),
        ],
    ),
    (
        "Actions",
        &[
            ("r", "Reload snapshot"),
            ("?", "Toggle help"),
            ("Ctrl+C", "Quit"),
        ],
    ),
];

/// Renders a centered help overlay on top of `area`.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tgi_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let lines = build_help_lines();
    let height = lines.len() as u16 + 2;
    let popup_area = centered_rect(HELP_WIDTH, height, area);

    Clear.render(popup_area, buf);

    let border_style = Style::default().fg(Color::LightYellow);
    let block = Block::default()
        .title(Span::styled(
            " Help ",
            border_style.add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    Paragraph::new(lines).block(block).render(popup_area, buf);
}

fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);

    let mut lines = vec![Line::from("")];
    for (section, bindings) in BINDINGS {
        lines.push(Line::from(Span::styled(format!("  {section}"), header_style)));
        for (key, action) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<10} "), key_style),
                Span::styled(*action, text_style),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));
    lines
}

/// Centers a `width`×`height` rectangle in `area`, shrinking it to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn centered_rect_positions_correctly() {
        let centered = centered_rect(20, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(centered, Rect::new(30, 7, 20, 10));
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let centered = centered_rect(100, 50, Rect::new(5, 5, 40, 12));
        assert_eq!(centered, Rect::new(5, 5, 40, 12));
    }

    #[test]
    fn overlay_lists_bindings() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_help_overlay(area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Help"));
        assert!(content.contains("Task states"));
        assert!(content.contains("Reload snapshot"));
        assert!(content.contains("Ctrl+C"));
    }

    #[test]
    fn overlay_handles_small_area() {
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        render_help_overlay(area, &mut buf);
    }
}
