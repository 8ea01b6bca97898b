//! Moves and the reasons an action can be turned down.

use super::phases::Outcome;
use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why the engine would ignore a move or a jump.
///
/// The engine's mutators never return this; it comes from the
/// `validate_*` queries so a caller can disable an action up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The cell index is not on the board.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed snapshot is already won or drawn.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// The history entry does not exist.
    #[display("History entry {} does not exist (history has {} entries)", index, len)]
    HistoryOutOfRange {
        /// Requested entry.
        index: usize,
        /// Current history length.
        len: usize,
    },
}

impl std::error::Error for MoveRejection {}
