//! Rewind - terminal tic-tac-toe with a jumpable move history.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use config::TuiConfig;
use terminal::Tui;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_cli(&cli);

    init_tracing(&config)?;
    info!(?config, "Starting rewind TUI");

    let mut app = App::new(&config);

    let mut tui = terminal::init()?;
    let res = run_app(&mut tui, &mut app);
    let restored = terminal::restore();

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    if let Err(err) = &restored {
        error!(error = %err, "Failed to restore terminal");
    }
    info!(moves = app.game().history_len() - 1, "Exiting rewind TUI");

    res?;
    restored.context("Failed to restore terminal")
}

/// Logs go to a file so they don't interfere with the alternate screen.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Draw, read one key, repeat until the app asks to quit.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            debug!(code = ?key.code, "Key pressed");
            app.handle_key(key.code);
        }
    }
    Ok(())
}
