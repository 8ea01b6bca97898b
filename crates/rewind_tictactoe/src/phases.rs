//! Derived game outcome and status line.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a terminal snapshot.
///
/// Renders the same text as the matching [`Status`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// Player won the game.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Game ended in a draw.
    #[display("Draw!")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// Status of the currently displayed snapshot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Status {
    /// The snapshot has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The snapshot is full with no line.
    #[display("Draw!")]
    Draw,
    /// The game continues; this player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Returns true for won and drawn snapshots.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }

    /// Converts to an outcome for terminal statuses.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Status::Winner(player) => Some(Outcome::Winner(*player)),
            Status::Draw => Some(Outcome::Draw),
            Status::NextPlayer(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        assert_eq!(Status::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(Status::Draw.to_string(), "Draw!");
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "Next player: O");
    }

    #[test]
    fn test_status_outcome() {
        assert_eq!(Status::Draw.outcome(), Some(Outcome::Draw));
        assert_eq!(Status::NextPlayer(Player::X).outcome(), None);
        assert!(Status::Winner(Player::O).is_over());
        assert_eq!(Outcome::Winner(Player::O).winner(), Some(Player::O));
        assert!(Outcome::Draw.is_draw());
    }

    #[test]
    fn test_outcome_renders_like_status() {
        for status in [Status::Winner(Player::X), Status::Winner(Player::O), Status::Draw] {
            let outcome = status.outcome().unwrap();
            assert_eq!(outcome.to_string(), status.to_string());
        }
    }
}
