//! Main application struct and run loop.
//!
//! [`App`] owns the [`AppState`], turns [`Message`]s into state changes,
//! draws the frame and periodically re-reads the task group snapshot.

use std::path::PathBuf;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tgi_config::Config;
use tgi_protocol::{Message, ProtocolError, TaskGroupSnapshot};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::{
    AppState,
    event::{event_to_message, poll_event},
    gate::NotifyDecision,
    layout::{
        BAR_PANEL_HEIGHT, HEADER_HEIGHT, LEGEND_HEIGHT, MIN_HEIGHT, MIN_WIDTH, STATUS_BAR_HEIGHT,
    },
    notify::{NoopNotifier, Notifier, TerminalNotifier},
    terminal::AppTerminal,
    widgets::{
        ProgressBarLayout, max_scroll, render_help_overlay, render_legend, render_progress_panel,
        render_status_bar, render_task_list,
    },
};

/// The main application struct.
#[derive(Debug)]
pub struct App {
    state: AppState,
    config: Config,
    /// Snapshot file re-read on every polling tick.
    source: Option<PathBuf>,
    notifier: Box<dyn Notifier>,
    should_quit: bool,
    reload_requested: bool,
    /// Where the bar was last drawn, used to resolve clicks.
    last_bar: Option<ProgressBarLayout>,
    /// Area of the task list in the last frame, used to bound scrolling.
    list_area: Rect,
}

impl App {
    /// Creates an application with no task group loaded.
    ///
    /// Notifications go to the terminal when enabled in `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tgi_config::Config;
    /// use tgi_protocol::dummy::dummy_snapshot;
    /// use tgi_tui::App;
    ///
    /// let mut app = App::new(Config::default());
    /// app.apply_snapshot(dummy_snapshot());
    /// assert_eq!(app.state().summary().unwrap().total_tasks, 12);
    /// ```
    #[must_use]
    pub fn new(config: Config) -> Self {
        let notifier: Box<dyn Notifier> = if config.notifications.enabled {
            Box::new(TerminalNotifier::stdout())
        } else {
            Box::new(NoopNotifier)
        };
        Self {
            state: AppState::new(),
            config,
            source: None,
            notifier,
            should_quit: false,
            reload_requested: false,
            last_bar: None,
            list_area: Rect::default(),
        }
    }

    /// Sets the snapshot file re-read by [`App::reload`].
    #[must_use]
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Replaces the notifier used when a build settles.
    #[must_use]
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns `true` if the user asked for a reload not yet performed.
    #[must_use]
    pub fn reload_requested(&self) -> bool {
        self.reload_requested
    }

    /// Displays `snapshot`, notifying the user if the build just settled.
    pub fn apply_snapshot(&mut self, snapshot: TaskGroupSnapshot) -> NotifyDecision {
        let decision = self.state.apply_snapshot(snapshot);
        if decision == NotifyDecision::Notify {
            self.send_notification();
        }
        decision
    }

    fn send_notification(&mut self) {
        let notifications = &self.config.notifications;
        if !notifications.enabled {
            debug!("task group settled, notifications disabled");
            return;
        }
        info!(message = %notifications.message, "task group settled, notifying");
        if let Err(err) = self.notifier.notify(&notifications.message) {
            warn!(error = %err, "failed to deliver notification");
        }
    }

    /// Re-reads the snapshot file and applies it.
    ///
    /// A failed read keeps the current task group on screen and reports the
    /// error in the status bar. Returns `None` when there is no source or
    /// the read failed.
    pub async fn reload(&mut self) -> Option<NotifyDecision> {
        self.reload_requested = false;
        let path = self.source.clone()?;
        let loaded = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ProtocolError::ReadSnapshot {
                path: path.clone(),
                source,
            })
            .and_then(|json| TaskGroupSnapshot::from_json(&json));

        match loaded {
            Ok(snapshot) => {
                debug!(
                    task_group_id = %snapshot.task_group_id,
                    tasks = snapshot.tasks.len(),
                    "snapshot reloaded"
                );
                Some(self.apply_snapshot(snapshot))
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to reload snapshot");
                self.state.status_message = Some(err.to_string());
                None
            }
        }
    }

    /// Processes a message and updates state.
    ///
    /// While the help overlay is shown, any message other than `Quit`
    /// closes it instead of taking effect.
    pub fn update(&mut self, msg: Message) {
        if self.state.help_visible {
            match msg {
                Message::Quit => self.should_quit = true,
                _ => {
                    self.state.dismiss_help();
                }
            }
            return;
        }

        match msg {
            Message::SetActiveStatus(state) => self.state.set_active_status(state),
            Message::ClearActiveStatus | Message::Escape => {
                self.state.clear_active_status();
            }
            Message::ScrollUp => self.state.scroll_up(),
            Message::ScrollDown => {
                let max = max_scroll(self.state.active_tasks().len(), self.list_area);
                self.state.scroll_down(max);
            }
            Message::Quit => self.should_quit = true,
            Message::Refresh => self.reload_requested = true,
            Message::ToggleHelp => self.state.toggle_help(),
            Message::ClickAt { column, row } => self.handle_click(column, row),
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let clicked = self
            .last_bar
            .as_ref()
            .and_then(|bar| bar.status_at(column, row));
        if let Some(state) = clicked {
            debug!(%state, column, row, "segment clicked");
            self.state.set_active_status(state);
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// The legend and the bar are only drawn when the task group has at
    /// least one task in a known state.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.last_bar = None;
            render_terminal_too_small(frame, area);
            return;
        }

        let segments = self
            .state
            .props()
            .map(|props| props.segments(self.config.progress.min_segment_percent));
        let show_bar = segments
            .as_ref()
            .is_some_and(|segments| segments.iter().any(|segment| segment.count > 0));
        let (legend_height, bar_height) = if show_bar {
            (LEGEND_HEIGHT, BAR_PANEL_HEIGHT)
        } else {
            (0, 0)
        };

        let [header_area, legend_area, bar_area, list_area, status_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(legend_height),
            Constraint::Length(bar_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        render_header(frame, header_area);

        self.last_bar = match segments {
            Some(segments) if show_bar => {
                render_legend(legend_area, frame.buffer_mut());
                render_progress_panel(&segments, bar_area, frame.buffer_mut())
            }
            _ => None,
        };

        self.list_area = list_area;
        let tasks = self.state.active_tasks();
        let scroll = self.state.list_scroll.min(max_scroll(tasks.len(), list_area));
        match (&self.state.snapshot, show_bar) {
            (Some(snapshot), false) => {
                let empty = Paragraph::new(format!(
                    "Task group {} has no tasks yet",
                    snapshot.task_group_id
                ))
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().title(" Tasks ").borders(Borders::ALL));
                frame.render_widget(empty, list_area);
            }
            _ => render_task_list(
                self.state.active_status,
                &tasks,
                scroll,
                list_area,
                frame.buffer_mut(),
            ),
        }
        self.state.list_scroll = scroll;

        render_status_bar(
            self.state.summary(),
            self.state.status_message.as_deref(),
            status_area,
            frame.buffer_mut(),
        );

        if self.state.help_visible {
            render_help_overlay(area, frame.buffer_mut());
        }
    }

    /// Runs the main application loop until the user quits.
    ///
    /// The snapshot is re-read every `polling.interval_secs` and whenever
    /// the user presses `r`.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or reading terminal events fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tgi_config::Config;
    /// use tgi_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(Config::default()).with_source("group.json");
    ///     app.reload().await;
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        let interval = self.config.polling.interval();
        let mut next_reload = Instant::now() + interval;

        while !self.should_quit {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(msg) = poll_event()?.as_ref().and_then(event_to_message) {
                self.update(msg);
            }

            if self.reload_requested || Instant::now() >= next_reload {
                self.reload().await;
                next_reload = Instant::now() + interval;
            }
        }

        Ok(())
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, hint_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(17)]).areas(inner);

    let title = Line::from(vec![
        Span::styled(
            "tgi",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled("Task Group Inspector", Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(title), title_area);

    let hint = Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" for help", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Right), hint_area);
}

fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small ({}×{})\nNeeds at least {MIN_WIDTH}×{MIN_HEIGHT}",
        area.width, area.height
    );
    let top = area.height.saturating_sub(2) / 2;
    let message_area = Rect {
        y: area.y + top,
        height: area.height - top,
        ..area
    };
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        message_area,
    );
}
