//! User notifications.
//!
//! The [`Notifier`] trait delivers the build-done message. The terminal
//! implementation emits an OSC 9 desktop notification escape (understood by
//! iTerm2, kitty, WezTerm, Windows Terminal and others) followed by a bell,
//! so terminals without OSC 9 support still get an audible cue.

use std::fmt;
use std::io::{self, Stdout, Write};

/// Error type for notification delivery.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Failed to write the notification to the terminal.
    #[error("failed to send notification: {0}")]
    Write(#[from] io::Error),
}

/// Something that can show a short message to the user.
pub trait Notifier: fmt::Debug {
    /// Shows `message` to the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification could not be delivered.
    fn notify(&mut self, message: &str) -> Result<(), NotifyError>;
}

/// Sends notifications as terminal escape sequences.
pub struct TerminalNotifier<W: Write> {
    out: W,
}

impl<W: Write> fmt::Debug for TerminalNotifier<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalNotifier").finish_non_exhaustive()
    }
}

impl TerminalNotifier<Stdout> {
    /// Creates a notifier writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalNotifier<W> {
    /// Creates a notifier writing to `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the notifier and returns the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn notify(&mut self, message: &str) -> Result<(), NotifyError> {
        // Control characters would terminate or corrupt the escape sequence.
        let text: String = message.chars().filter(|c| !c.is_control()).collect();
        write!(self.out, "\x1b]9;{text}\x07\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

/// A notifier that drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&mut self, _message: &str) -> Result<(), NotifyError> {
        Ok(())
    }
}
