//! Centralized layout measurements for the TUI.
//!
//! Shared row heights and minimum terminal dimensions used by the app view.

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the legend row.
pub const LEGEND_HEIGHT: u16 = 1;

/// Height of the bordered progress bar panel (one bar row plus borders).
pub const BAR_PANEL_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Minimum terminal height for useful rendering.
///
/// Header, legend, bar panel, status bar, and at least three rows of
/// task list (plus its borders).
pub const MIN_HEIGHT: u16 =
    HEADER_HEIGHT + LEGEND_HEIGHT + BAR_PANEL_HEIGHT + STATUS_BAR_HEIGHT + 5;

/// Minimum terminal width for useful rendering.
///
/// Six segments need room for their labels at the default segment floor.
pub const MIN_WIDTH: u16 = 40;
