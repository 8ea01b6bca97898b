//! Serializable read-only view of a game for presentation layers.

use super::engine::Game;
use super::Player;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw the game, as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Displayed snapshot, row-major; `None` is an empty cell.
    pub board: [Option<Player>; 9],
    /// Index of the displayed snapshot.
    pub cursor: usize,
    /// Number of snapshots in the history.
    pub history_len: usize,
    /// Status line, e.g. `"Next player: X"`.
    pub status: String,
    /// Cells of the winning line, if the displayed snapshot is won.
    pub winning_line: Option<[usize; 3]>,
    /// Whether the displayed snapshot is won or drawn.
    pub is_over: bool,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        let evaluation = game.evaluation();
        Self {
            board: game.current().squares().map(|square| square.player()),
            cursor: game.cursor(),
            history_len: game.history_len(),
            status: game.status().to_string(),
            winning_line: evaluation.win().map(|win| win.indices()),
            is_over: evaluation.is_terminal(),
        }
    }
}

impl Game {
    /// Builds a [`GameView`] of the displayed snapshot.
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_of_new_game() {
        let view = Game::new().view();
        assert_eq!(view.board, [None; 9]);
        assert_eq!(view.cursor, 0);
        assert_eq!(view.history_len, 1);
        assert_eq!(view.status, "Next player: X");
        assert_eq!(view.winning_line, None);
        assert!(!view.is_over);
    }

    #[test]
    fn test_view_of_won_game() {
        let mut game = Game::new();
        for i in [0, 3, 1, 4, 2] {
            game.apply_move(i);
        }
        let view = game.view();
        assert_eq!(view.board[0], Some(Player::X));
        assert_eq!(view.board[3], Some(Player::O));
        assert_eq!(view.status, "Winner: X");
        assert_eq!(view.winning_line, Some([0, 1, 2]));
        assert!(view.is_over);
    }

    #[test]
    fn test_view_serializes_as_plain_json() {
        let mut game = Game::new();
        game.apply_move(4);
        let json = serde_json::to_value(game.view()).expect("view serializes");

        assert_eq!(json["board"][4], "X");
        assert!(json["board"][0].is_null());
        assert_eq!(json["history_len"], 2);
        assert_eq!(json["status"], "Next player: O");
        assert!(json["winning_line"].is_null());
    }
}
