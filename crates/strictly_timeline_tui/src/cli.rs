//! Command-line interface for strictly_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_timeline::Position;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "STRICTLY_TIMELINE_CONFIG";

/// Strictly Timeline - tic-tac-toe with full move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timeline")]
#[command(about = "Tic-tac-toe with full move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (falls back to $STRICTLY_TIMELINE_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show the move list newest first
    #[arg(long, global = true)]
    pub descending: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Config file from the command line, else from the environment.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config
            .clone()
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Play cells in order and print the resulting game
    Replay {
        /// Cells to play: indices 0-8 or labels such as `center`
        cells: Vec<Position>,
    },
}
