//! Terminal UI for tgi.
//!
//! Shows a task group as a segmented progress bar with one colored segment
//! per task state, lists the tasks of a clicked segment, and notifies the
//! user once the group settles.
//!
//! # Overview
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application and progress bar state
//! - [`gate`]: Build-done notification gate
//! - [`notify`]: Notification delivery
//! - [`widgets`]: Rendering functions
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event polling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use tgi_config::Config;
//! use tgi_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(Config::load()?).with_source("group.json");
//!     app.reload().await;
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod gate;
pub mod layout;
pub mod notify;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::App;
pub use gate::{NotificationGate, NotifyDecision};
pub use notify::{NoopNotifier, Notifier, NotifyError, TerminalNotifier};
pub use state::{AppState, ProgressBarProps, ProgressBarState};
