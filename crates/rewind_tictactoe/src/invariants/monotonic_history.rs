//! Monotonic history invariant: marks are only ever added, one per step.

use super::super::{Game, Position, Square};
use super::Invariant;

/// Invariant: the history starts empty and each step fills exactly one square.
///
/// No step clears a square or replaces one mark with another.
pub struct MonotonicHistoryInvariant;

impl Invariant<Game> for MonotonicHistoryInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if history.first().is_some_and(|first| first.occupied_count() != 0) {
            return false;
        }

        history.windows(2).all(|pair| {
            let mut filled = 0;
            for pos in Position::ALL {
                match (pair[0].get(pos), pair[1].get(pos)) {
                    (Square::Empty, Square::Occupied(_)) => filled += 1,
                    (before, after) if before == after => {}
                    _ => return false,
                }
            }
            filled == 1
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}
