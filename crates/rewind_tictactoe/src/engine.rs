//! History-backed game engine.
//!
//! The engine keeps every board snapshot since the start of the game and a
//! cursor selecting the one on display. Moves are made from the displayed
//! snapshot; making a move from an earlier snapshot discards everything
//! after it and starts a new branch.
//!
//! Invalid actions are ignored rather than reported: `apply_move`,
//! `jump_to` and `reset` return nothing, and a rejected call leaves the
//! engine exactly as it was. Use [`Game::validate_move`] and
//! [`Game::validate_jump`] to find out in advance whether an action would
//! be accepted.

use super::action::{Move, MoveRejection};
use super::contracts::{self, Contract, JumpContract, MoveContract};
use super::phases::{Outcome, Status};
use super::rules::{self, Evaluation};
use super::{Board, Player, Position, Square};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game with a jumpable, branching move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Snapshots from the empty board up to the latest move.
    pub(crate) history: Vec<Board>,
    /// Index of the displayed snapshot.
    pub(crate) cursor: usize,
}

impl Game {
    /// Creates a game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
        }
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// All snapshots, starting with the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of snapshots in the history (always at least 1).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the displayed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true when the latest snapshot is on display.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.history.len()
    }

    /// Player whose turn it is at the displayed snapshot.
    pub fn to_move(&self) -> Player {
        Player::for_move_count(self.cursor)
    }

    /// Evaluates the displayed snapshot.
    pub fn evaluation(&self) -> Evaluation {
        rules::evaluate(self.current())
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> Status {
        match self.evaluation() {
            Evaluation::Won(win) => Status::Winner(win.player),
            Evaluation::Draw => Status::Draw,
            Evaluation::InProgress => Status::NextPlayer(self.to_move()),
        }
    }

    /// Outcome of the displayed snapshot, if it is terminal.
    pub fn outcome(&self) -> Option<Outcome> {
        self.status().outcome()
    }

    /// Returns true when the displayed snapshot is won or drawn.
    pub fn is_over(&self) -> bool {
        self.evaluation().is_terminal()
    }

    /// Winning line on the displayed snapshot, for highlighting.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.evaluation().win().map(|win| win.line)
    }

    /// Checks whether a move at `index` would be accepted.
    ///
    /// Returns the player who would make the move.
    pub fn validate_move(&self, index: usize) -> Result<Player, MoveRejection> {
        MoveContract::pre(self, &index)?;
        Ok(self.to_move())
    }

    /// Checks whether a jump to history entry `index` would be accepted.
    pub fn validate_jump(&self, index: usize) -> Result<(), MoveRejection> {
        JumpContract::pre(self, &index)
    }

    /// Places the current player's mark at cell `index` (0-8).
    ///
    /// Ignored when the displayed snapshot is won or drawn, when `index` is
    /// off the board, or when the cell is occupied. Otherwise every snapshot
    /// after the cursor is dropped, the new snapshot is appended and the
    /// cursor moves onto it.
    #[instrument(skip(self), fields(cursor = self.cursor, history_len = self.history.len()))]
    pub fn apply_move(&mut self, index: usize) {
        if let Err(reason) = MoveContract::pre(self, &index) {
            debug!(%reason, "Move ignored");
            return;
        }
        let Some(position) = Position::from_index(index) else {
            return;
        };

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.to_move();
        let next = self.current().with_mark(position, player);
        let discarded = self.history.len() - (self.cursor + 1);
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor += 1;

        info!(%player, %position, discarded, "Move applied");
        debug!(board = %self.current().display(), status = %self.status(), "Board after move");

        #[cfg(debug_assertions)]
        contracts::verify::<MoveContract, usize>(&before, self);
    }

    /// Places the current player's mark at `position`.
    ///
    /// Same rules as [`Game::apply_move`].
    pub fn place(&mut self, position: Position) {
        self.apply_move(position.to_index());
    }

    /// Moves the cursor to history entry `index` without touching the history.
    ///
    /// Ignored when the entry does not exist.
    #[instrument(skip(self), fields(cursor = self.cursor, history_len = self.history.len()))]
    pub fn jump_to(&mut self, index: usize) {
        if let Err(reason) = JumpContract::pre(self, &index) {
            debug!(%reason, "Jump ignored");
            return;
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.cursor = index;
        debug!(status = %self.status(), "Jumped");

        #[cfg(debug_assertions)]
        contracts::verify::<JumpContract, usize>(&before, self);
    }

    /// Discards all moves and returns to the empty board.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(Board::new());
        self.cursor = 0;
        info!("Game reset");
        contracts::assert_invariants(self);
    }

    /// The move that produced history entry `index`.
    ///
    /// Entry 0 (the empty board) and entries past the end have no move.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        let before = self.history.get(index.checked_sub(1)?)?;
        let after = self.history.get(index)?;
        Position::ALL.iter().find_map(|&pos| {
            match (before.get(pos), after.get(pos)) {
                (Square::Empty, Square::Occupied(player)) => Some(Move::new(player, pos)),
                _ => None,
            }
        })
    }

    /// The move that produced the displayed snapshot.
    pub fn last_move(&self) -> Option<Move> {
        self.move_at(self.cursor)
    }

    /// One entry per snapshot, for rendering a move list.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        (0..self.history.len())
            .map(|index| HistoryEntry {
                index,
                is_current: index == self.cursor,
                played: self.move_at(index),
            })
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// One line of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Whether this entry is the displayed snapshot.
    pub is_current: bool,
    /// The move that produced this entry (`None` for the game start).
    pub played: Option<Move>,
}

impl HistoryEntry {
    /// Button text for the entry.
    pub fn label(&self) -> String {
        if self.index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.index)
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())?;
        if self.is_current {
            write!(f, " (current)")?;
        }
        Ok(())
    }
}
