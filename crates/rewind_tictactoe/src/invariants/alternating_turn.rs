//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: snapshot `i` holds `i` marks, and moves alternate starting with X.
///
/// Snapshot `i` has `ceil(i / 2)` X marks and `floor(i / 2)` O marks, so the
/// mark added going into snapshot `i` is X for odd `i` and O for even `i`.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        game.history().iter().enumerate().all(|(i, board)| {
            board.occupied_count() == i
                && board.count(Player::X) == i.div_ceil(2)
                && board.count(Player::O) == i / 2
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
