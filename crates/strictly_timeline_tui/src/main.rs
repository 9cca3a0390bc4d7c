//! Strictly Timeline - terminal front end
//!
//! Play tic-tac-toe, rewind to any earlier move, and branch a new future.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod replay;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use app::{App, Control};
use clap::Parser;
use cli::{Cli, Command};
use config::TimelineConfig;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use terminal::TerminalGuard;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TimelineConfig::load(cli.config_path().as_deref())?;
    let ascending = *config.ascending() && !cli.descending;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_logging(&config)?;
            run_tui(ascending)
        }
        Command::Replay { cells } => {
            init_stderr_logging(&config);
            replay::run(&cells, ascending, &mut io::stdout().lock())?;
            Ok(())
        }
    }
}

fn env_filter(config: &TimelineConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to a file so output does not interfere with the TUI.
fn init_file_logging(config: &TimelineConfig) -> Result<()> {
    let path = config.log_file();
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging(config: &TimelineConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(io::stderr)
        .try_init();
}

/// Runs the interactive terminal UI until the player quits.
#[instrument]
fn run_tui(ascending: bool) -> Result<()> {
    info!("Starting Strictly Timeline TUI");

    // Declared first so it drops last, after the terminal.
    let _guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(ascending));

    if let Err(err) = &res {
        tracing::error!(error = ?err, "TUI loop error");
    }
    info!("TUI closed");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Each key press is handled to completion before the next read.
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            return Ok(());
        }
    }
}
