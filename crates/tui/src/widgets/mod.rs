//! Widget components for the tgi TUI.
//!
//! Each widget is a plain function rendering borrowed data into a
//! [`Buffer`](ratatui::buffer::Buffer), which keeps them easy to test and
//! compose.
//!
//! # Modules
//!
//! - [`progress_bar`]: The segmented task state bar and its click layout
//! - [`legend`]: Color legend for the six task states
//! - [`task_list`]: Tasks of the selected state
//! - [`status_bar`]: Footer with group summary and keybinding hints
//! - [`help`]: Keybinding overlay
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use tgi_protocol::dummy::dummy_snapshot;
//! use tgi_protocol::{StatusBuckets, segment_percentages};
//! use tgi_tui::widgets;
//!
//! let snapshot = dummy_snapshot();
//! let buckets = StatusBuckets::classify(&snapshot.tasks);
//! let segments = segment_percentages(&buckets, snapshot.tasks.len(), 5.0);
//!
//! let area = Rect::new(0, 0, 80, 1);
//! let mut buf = Buffer::empty(area);
//! let layout = widgets::render_progress_bar(&segments, area, &mut buf);
//! assert!(layout.is_some());
//! ```

pub mod help;
pub mod legend;
pub mod progress_bar;
pub mod status_bar;
pub mod task_list;

// Re-export primary rendering functions for convenience
pub use help::render_help_overlay;
pub use legend::render_legend;
pub use progress_bar::{
    ProgressBarLayout, SegmentArea, allocate_columns, render_progress_bar, render_progress_panel,
    segment_style, state_color,
};
pub use status_bar::{GroupSummary, render_status_bar};
pub use task_list::{max_scroll, render_task_list};

#[cfg(test)]
mod tests;
