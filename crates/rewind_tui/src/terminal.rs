//! Raw-mode terminal setup and teardown.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, instrument};

/// Terminal type driven by the event loop.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen.
///
/// Steps already taken are undone when a later one fails. Also installs a
/// panic hook that restores the terminal before the panic message prints.
#[instrument]
pub fn init() -> Result<Tui> {
    install_panic_hook();

    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err).context("Failed to enter alternate screen");
    }

    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => {
            debug!("Terminal ready");
            Ok(terminal)
        }
        Err(err) => {
            let _ = restore();
            Err(err).context("Failed to create terminal")
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step runs even when an earlier one fails; the first error is returned.
pub fn restore() -> io::Result<()> {
    first_error([
        disable_raw_mode(),
        execute!(io::stdout(), LeaveAlternateScreen),
        execute!(io::stdout(), Show),
    ])
}

fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        hook(info);
    }));
}

fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}
