//! Application state and key handling.

use crate::config::TuiConfig;
use crate::input;
use crossterm::event::KeyCode;
use rewind_tictactoe::{Game, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Pane receiving navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected: usize,
    show_indices: bool,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application at the empty board.
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: *config.first_focus(),
            selected: 0,
            show_indices: *config.show_indices(),
            message: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move-list row highlighted in the history pane.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether empty squares show their cell number.
    pub fn show_indices(&self) -> bool {
        self.show_indices
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(index) = input::cell_for_digit(key) {
            self.play(index);
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.reset(),
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected = self.game.cursor();
            }
            KeyCode::Char('[') => {
                if let Some(index) = self.game.cursor().checked_sub(1) {
                    self.jump(index);
                }
            }
            KeyCode::Char(']') => self.jump(self.game.cursor() + 1),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor.to_index()),
                Focus::History => self.jump(self.selected),
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = input::move_cursor(self.cursor, key),
                Focus::History => self.move_selection(key),
            },
            _ => {}
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.game.history_len() - 1;
        self.selected = match key {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => (self.selected + 1).min(last),
            _ => self.selected,
        };
    }

    fn play(&mut self, index: usize) {
        match self.game.validate_move(index) {
            Ok(player) => {
                self.game.apply_move(index);
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                    self.message = Some(format!("{} played {}", player, pos.label()));
                }
            }
            Err(reason) => self.message = Some(reason.to_string()),
        }
        self.selected = self.game.cursor();
    }

    fn jump(&mut self, index: usize) {
        match self.game.validate_jump(index) {
            Ok(()) => {
                self.game.jump_to(index);
                self.message = Some(match index {
                    0 => "Showing game start".to_string(),
                    n => format!("Showing move #{}", n),
                });
            }
            Err(reason) => self.message = Some(reason.to_string()),
        }
        self.selected = self.game.cursor();
    }

    fn reset(&mut self) {
        self.game.reset();
        self.cursor = Position::Center;
        self.selected = 0;
        self.message = Some("Game restarted. Player X's turn.".to_string());
    }
}
