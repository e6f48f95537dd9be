//! Terminal event polling and key mappings.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tgi_protocol::{Message, TaskState};

/// How long [`poll_event`] waits before giving control back to the loop.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Waits briefly for a terminal event.
///
/// Returns `None` when nothing arrived within the poll timeout.
///
/// # Errors
///
/// Returns an error if the terminal cannot be polled or read.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Maps a terminal event to a message, if it is bound to one.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Left clicks become [`Message::ClickAt`]; other mouse activity is ignored.
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::ScrollUp => Some(Message::ScrollUp),
        MouseEventKind::ScrollDown => Some(Message::ScrollDown),
        _ => None,
    }
}

/// Maps a key press to a message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `1`..`6` | Show completed, failed, exception, unscheduled, running, pending |
/// | `0` | Clear the active state |
/// | `Esc` | Close help or clear the active state |
/// | `Up` / `Down` | Scroll the task list |
/// | `r` | Reload the snapshot |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Up => Some(Message::ScrollUp),
        KeyCode::Down => Some(Message::ScrollDown),
        KeyCode::Char('0') => Some(Message::ClearActiveStatus),
        KeyCode::Char(ch @ '1'..='6') => {
            let index = ch as usize - '1' as usize;
            Some(Message::SetActiveStatus(TaskState::ALL[index]))
        }
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        _ => None,
    }
}
