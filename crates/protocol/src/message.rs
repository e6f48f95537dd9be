//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

use crate::task::TaskState;

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application to update its state.
///
/// # Examples
///
/// ```
/// use tgi_protocol::{Message, TaskState};
///
/// let msg = Message::SetActiveStatus(TaskState::Failed);
/// assert!(msg.is_status_filter());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Show the tasks of the given state below the bar.
    SetActiveStatus(TaskState),
    /// Clear the active state.
    ClearActiveStatus,
    /// Scroll the task list up.
    ScrollUp,
    /// Scroll the task list down.
    ScrollDown,
    /// Escape: close help or clear the active state (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Reload the task group snapshot now.
    Refresh,
    /// Toggle help overlay.
    ToggleHelp,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },
}

impl Message {
    /// Returns `true` if this message changes the active status.
    ///
    /// # Examples
    ///
    /// ```
    /// use tgi_protocol::Message;
    ///
    /// assert!(Message::ClearActiveStatus.is_status_filter());
    /// assert!(!Message::Refresh.is_status_filter());
    /// ```
    #[must_use]
    pub fn is_status_filter(&self) -> bool {
        matches!(self, Self::SetActiveStatus(_) | Self::ClearActiveStatus)
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use tgi_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}
