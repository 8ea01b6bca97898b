//! Command-line interface for rewind.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a move history you can jump through
#[derive(Parser, Debug, Default)]
#[command(name = "rewind")]
#[command(about = "Play tic-tac-toe in the terminal and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File to write logs to
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "rewind_tictactoe=trace"
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Show cell numbers on empty squares
    #[arg(long)]
    pub show_indices: bool,
}
