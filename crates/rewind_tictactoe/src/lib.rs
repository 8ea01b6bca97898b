//! Rewind - tic-tac-toe with a jumpable move history.
//!
//! The crate has two parts:
//!
//! - **Rules**: a pure evaluator that classifies one board as in progress,
//!   won along a line, or drawn.
//! - **Engine**: [`Game`], which keeps every board snapshot since the start
//!   and a cursor selecting the displayed one. Moving from an earlier
//!   snapshot discards the later ones and starts a new branch.
//!
//! Invalid actions are ignored, never reported as errors. Callers that
//! want to disable an action up front use [`Game::validate_move`] or
//! [`Game::validate_jump`].
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, Player, Status};
//!
//! let mut game = Game::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.apply_move(cell);
//! }
//! assert_eq!(game.status(), Status::Winner(Player::X));
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! // Step back two moves and play somewhere else.
//! game.jump_to(3);
//! game.apply_move(8);
//! assert_eq!(game.history_len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod engine;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Move, MoveRejection};
pub use engine::{Game, HistoryEntry};
pub use phases::{Outcome, Status};
pub use position::Position;
pub use rules::{Evaluation, Win, check_winner, evaluate};
pub use types::{Board, Player, Square};
pub use view::GameView;
