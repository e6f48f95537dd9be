//! Entering and leaving the full-screen terminal mode.
//!
//! The bar needs raw mode, the alternate screen and mouse capture (segments
//! are clickable). [`install_panic_hook`] undoes all three before a panic
//! message is printed so the shell stays usable.

use std::io::{self, Stdout, Write};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Terminal handle driven by the app.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for entering or leaving full-screen mode.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("failed to enter full-screen mode: {0}")]
    Setup(#[source] io::Error),

    #[error("failed to leave full-screen mode: {0}")]
    Restore(#[source] io::Error),
}

/// Switches stdout to raw mode on the alternate screen with mouse capture.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if any of the terminal modes cannot be
/// enabled.
///
/// # Examples
///
/// ```no_run
/// use tgi_tui::terminal;
///
/// let mut term = terminal::setup_terminal()?;
/// terminal::restore_terminal(&mut term)?;
/// # Ok::<(), tgi_tui::terminal::TerminalError>(())
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(TerminalError::Setup)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Leaves full-screen mode and shows the cursor again.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if the terminal refuses any step.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    leave_full_screen(terminal.backend_mut()).map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)
}

fn leave_full_screen(out: &mut impl Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, DisableMouseCapture, LeaveAlternateScreen)
}

/// Chains a panic hook that leaves full-screen mode first.
///
/// Call once, before [`setup_terminal`].
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave_full_screen(&mut io::stdout());
        previous(info);
    }));
}
