//! tgi - Task group inspector.
//!
//! Shows a task group snapshot as a segmented progress bar and notifies
//! when the build settles.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tgi_config::Config;
use tgi_protocol::TaskGroupSnapshot;
use tgi_tui::{App, terminal};
use tracing_subscriber::EnvFilter;

/// Terminal progress bar for the tasks of a task group.
///
/// The snapshot file is re-read periodically, so an external process can
/// keep it up to date while the build runs.
#[derive(Debug, Parser)]
#[command(name = "tgi", version, about)]
struct Cli {
    /// Task group snapshot (JSON in the queue's listTaskGroup shape)
    snapshot: PathBuf,

    /// Configuration file, instead of the default search locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(cli: &Cli) -> Result<()> {
    // The TUI owns the terminal, so logs only ever go to a file.
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };
    let snapshot = TaskGroupSnapshot::load(&cli.snapshot)?;
    tracing::info!(
        task_group_id = %snapshot.task_group_id,
        interval_secs = config.polling.interval_secs,
        "starting"
    );

    let mut app = App::new(config).with_source(&cli.snapshot);
    app.apply_snapshot(snapshot);

    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;
    let result = app.run(&mut terminal).await;
    terminal::restore_terminal(&mut terminal)?;

    result
}
