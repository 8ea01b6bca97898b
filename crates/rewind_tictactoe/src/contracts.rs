//! Contract-based validation for engine actions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions decide whether the engine accepts an
//! action; postconditions are verified in debug builds after it runs.

use super::action::MoveRejection;
use super::engine::Game;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::Position;
use tracing::{error, instrument};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the displayed snapshot is not won or drawn.
pub struct NotTerminal;

impl NotTerminal {
    /// Rejects when the displayed snapshot is terminal.
    pub fn check(game: &Game) -> Result<(), MoveRejection> {
        match game.outcome() {
            Some(outcome) => Err(MoveRejection::GameOver(outcome)),
            None => Ok(()),
        }
    }
}

/// Precondition: the cell index is on the board.
pub struct CellInRange;

impl CellInRange {
    /// Resolves `index` to a position.
    pub fn check(index: usize) -> Result<Position, MoveRejection> {
        Position::from_index(index).ok_or(MoveRejection::OutOfRange(index))
    }
}

/// Precondition: the square at the position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects when `pos` is occupied on the displayed snapshot.
    pub fn check(game: &Game, pos: Position) -> Result<(), MoveRejection> {
        if game.current().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal if the game is not over, the
/// cell exists and the cell is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(game: &Game, index: usize) -> Result<(), MoveRejection> {
        NotTerminal::check(game)?;
        let pos = CellInRange::check(index)?;
        SquareIsEmpty::check(game, pos)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Displayed snapshot is not terminal
/// - Cell index is 0-8
/// - Cell is empty
///
/// Postconditions:
/// - Snapshots up to the old cursor are kept, later ones are gone
/// - Exactly one snapshot was appended and the cursor points at it
/// - All game invariants hold
pub struct MoveContract;

impl Contract<Game, usize> for MoveContract {
    fn pre(game: &Game, index: &usize) -> Result<(), MoveRejection> {
        LegalMove::check(game, *index)
    }

    fn post(before: &Game, after: &Game) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = GameInvariants::check_all(after).err().unwrap_or_default();
        let kept = before.cursor() + 1;

        if after.history_len() != kept + 1 || after.cursor() != kept {
            violations.push(InvariantViolation::new(
                "Move appends exactly one snapshot after the cursor",
            ));
        }
        if after.history().get(..kept) != before.history().get(..kept) {
            violations.push(InvariantViolation::new(
                "Move keeps every snapshot up to the cursor",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for moving the cursor through history.
pub struct JumpContract;

impl Contract<Game, usize> for JumpContract {
    fn pre(game: &Game, index: &usize) -> Result<(), MoveRejection> {
        if *index < game.history_len() {
            Ok(())
        } else {
            Err(MoveRejection::HistoryOutOfRange {
                index: *index,
                len: game.history_len(),
            })
        }
    }

    fn post(before: &Game, after: &Game) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = GameInvariants::check_all(after).err().unwrap_or_default();
        if before.history() != after.history() {
            violations.push(InvariantViolation::new("Jump leaves history unchanged"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Verification helpers
// ─────────────────────────────────────────────────────────────

/// Checks a contract's postcondition, logging and asserting on failure.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
pub(crate) fn verify<C, A>(before: &Game, after: &Game)
where
    C: Contract<Game, A>,
{
    if let Err(violations) = C::post(before, after) {
        report(&violations);
    }
}

/// Asserts that all game invariants hold (panics on violation in debug builds).
pub(crate) fn assert_invariants(game: &Game) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameInvariants::check_all(game)
    {
        report(&violations);
    }
}

fn report(violations: &[InvariantViolation]) {
    for violation in violations {
        error!(invariant = %violation.description, "Game invariant violated");
    }
    debug_assert!(
        violations.is_empty(),
        "game invariants violated: {:?}",
        violations
    );
}
