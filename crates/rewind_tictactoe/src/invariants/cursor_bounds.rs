//! Cursor bounds invariant: the cursor always selects an existing snapshot.

use super::super::Game;
use super::Invariant;

/// Invariant: history is non-empty and `cursor < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<Game> for CursorInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        !game.history.is_empty() && game.cursor < game.history.len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing snapshot"
    }
}
