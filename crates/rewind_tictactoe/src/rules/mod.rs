//! Game rules for tic-tac-toe.
//!
//! Pure functions for classifying a single board snapshot. Rules are
//! separated from the history engine so they can be tested and composed
//! on their own.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Win, check_winner};

use super::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Classification of one board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// No winning line and at least one empty square.
    InProgress,
    /// A player completed a line.
    Won(Win),
    /// Board is full with no winning line.
    Draw,
}

impl Evaluation {
    /// Returns true for won and drawn boards.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Evaluation::InProgress)
    }

    /// Returns the win, if any.
    pub fn win(&self) -> Option<Win> {
        match self {
            Evaluation::Won(win) => Some(*win),
            _ => None,
        }
    }
}

/// Evaluates a board: win first, then draw, otherwise in progress.
///
/// A board is only drawn once every square is filled; there is no early
/// stalemate detection.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some(win) = check_winner(board) {
        Evaluation::Won(win)
    } else if is_full(board) {
        Evaluation::Draw
    } else {
        Evaluation::InProgress
    }
}
