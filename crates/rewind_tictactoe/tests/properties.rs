//! Property-based tests for the evaluator and the history engine.
//!
//! Random sequences of moves, jumps and resets are driven through the
//! engine and every reachable state is checked against the game invariants.

use proptest::prelude::*;
use rewind_tictactoe::invariants::{GameInvariants, InvariantSet};
use rewind_tictactoe::rules::LINES;
use rewind_tictactoe::{
    Board, Evaluation, Game, Move, Player, Position, Square, Status, check_winner, evaluate,
};

// =============================================================================
// Strategies
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum Action {
    Move(usize),
    Jump(usize),
    Reset,
}

/// Mostly moves, some jumps, rare resets. Out-of-range values are included.
fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        8 => (0usize..11).prop_map(Action::Move),
        3 => (0usize..12).prop_map(Action::Jump),
        1 => Just(Action::Reset),
    ]
}

fn arb_square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(arb_square()).prop_map(Board::from_squares)
}

fn arb_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

fn apply(game: &mut Game, action: Action) {
    match action {
        Action::Move(i) => game.apply_move(i),
        Action::Jump(i) => game.jump_to(i),
        Action::Reset => game.reset(),
    }
}

fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(player)))
}

// =============================================================================
// Evaluator properties
// =============================================================================

proptest! {
    #[test]
    fn filled_line_wins_for_that_mark(
        line_index in 0usize..8,
        player in arb_player(),
        noise in proptest::collection::vec(0usize..9, 0..4),
    ) {
        let line = LINES[line_index];
        // Opponent marks go only on squares off the line.
        let mut board = Board::new();
        for index in noise {
            let pos = Position::from_index(index).unwrap();
            if !line.contains(&pos) {
                board = board.with_mark(pos, player.opponent());
            }
        }
        for pos in line {
            board = board.with_mark(pos, player);
        }
        prop_assume!(!has_line(&board, player.opponent()));

        let win = check_winner(&board).expect("filled line must win");
        prop_assert_eq!(win.player, player);
        prop_assert_eq!(win.line, line);
    }

    #[test]
    fn no_line_means_no_win(board in arb_board()) {
        let any_line = has_line(&board, Player::X) || has_line(&board, Player::O);
        prop_assert_eq!(check_winner(&board).is_some(), any_line);
    }

    #[test]
    fn draw_iff_full_without_line(board in arb_board()) {
        let full = board.occupied_count() == 9;
        let any_line = has_line(&board, Player::X) || has_line(&board, Player::O);
        let evaluation = evaluate(&board);

        prop_assert_eq!(evaluation == Evaluation::Draw, full && !any_line);
        prop_assert_eq!(evaluation == Evaluation::InProgress, !full && !any_line);
    }
}

// =============================================================================
// Engine properties
// =============================================================================

proptest! {
    #[test]
    fn reachable_games_keep_invariants(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let mut game = Game::new();
        for action in actions {
            apply(&mut game, action);
            prop_assert!(GameInvariants::check_all(&game).is_ok());
        }
    }

    #[test]
    fn turns_alternate_starting_with_x(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let mut game = Game::new();
        for action in actions {
            apply(&mut game, action);
        }

        for (i, board) in game.history().iter().enumerate() {
            prop_assert_eq!(board.occupied_count(), i);
            if i > 0 {
                let played: Move = game.move_at(i).expect("every later entry has a move");
                let expected = if i % 2 == 1 { Player::X } else { Player::O };
                prop_assert_eq!(played.player, expected);
            }
        }
    }

    #[test]
    fn rejected_actions_change_nothing(
        actions in proptest::collection::vec(arb_action(), 0..30),
        probe in arb_action(),
    ) {
        let mut game = Game::new();
        for action in actions {
            apply(&mut game, action);
        }

        let rejected = match probe {
            Action::Move(i) => game.validate_move(i).is_err(),
            Action::Jump(i) => game.validate_jump(i).is_err(),
            Action::Reset => false,
        };
        let before = game.clone();
        apply(&mut game, probe);

        if rejected {
            prop_assert_eq!(game, before);
        } else if let Action::Move(_) = probe {
            prop_assert_eq!(game.history_len(), before.cursor() + 2);
            prop_assert_eq!(&game.history()[..=before.cursor()], &before.history()[..=before.cursor()]);
        }
    }

    #[test]
    fn jump_never_changes_history(
        actions in proptest::collection::vec(arb_action(), 0..30),
        target in 0usize..12,
    ) {
        let mut game = Game::new();
        for action in actions {
            apply(&mut game, action);
        }
        let history = game.history().to_vec();

        game.jump_to(target);

        prop_assert_eq!(game.history(), history.as_slice());
        if target < history.len() {
            prop_assert_eq!(game.cursor(), target);
        }
    }

    #[test]
    fn reset_always_returns_to_start(actions in proptest::collection::vec(arb_action(), 0..30)) {
        let mut game = Game::new();
        for action in actions {
            apply(&mut game, action);
        }
        game.reset();

        prop_assert_eq!(game.history(), &[Board::new()][..]);
        prop_assert_eq!(game.cursor(), 0);
        prop_assert_eq!(game.status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn terminal_snapshots_only_at_the_end(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let mut game = Game::new();
        for action in actions {
            apply(&mut game, action);
        }
        let last = game.history_len() - 1;
        for (i, board) in game.history().iter().enumerate() {
            if i < last {
                prop_assert!(!evaluate(board).is_terminal());
            }
        }
    }
}
