//! Application state and key handling.

use super::input::{digit_cell, move_cursor};
use crate::engine::{Match, Player, Position};
use crossterm::event::KeyCode;
use tracing::{debug, instrument, warn};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// Holds the match and the cursor; everything shown on screen is derived
/// from these on each frame.
#[derive(Debug)]
pub struct App {
    game: Match,
    cursor: Position,
    feedback: Option<String>,
}

impl App {
    /// Creates an application around a match.
    pub fn new(game: Match) -> Self {
        Self {
            game,
            cursor: Position::Center,
            feedback: None,
        }
    }

    /// Gets the current match.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the status message.
    pub fn status_message(&self) -> String {
        let status = self.game.status_line();
        let status = if self.game.is_finished() {
            format!("{} Press 'n' for a new match or 'r' to reset.", status)
        } else {
            status
        };
        match &self.feedback {
            Some(feedback) => format!("{} | {}", feedback, status),
            None => status,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('n') => self.new_match(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.submit(self.cursor.to_index());
            }
            code => {
                if let Some(cell) = digit_cell(code) {
                    self.submit(cell);
                } else {
                    self.cursor = move_cursor(self.cursor, code);
                }
            }
        }
        Control::Continue
    }

    /// Requests a move and keeps the report's feedback.
    fn submit(&mut self, cell: usize) {
        if let Some(pos) = Position::from_index(cell) {
            self.cursor = pos;
        }
        let report = self.game.request_move(cell);
        self.feedback = report.rejection().map(|r| r.to_string());
    }

    /// Clears the board, same players and order.
    pub fn reset(&mut self) {
        debug!("Resetting match");
        self.game.reset_match();
        self.feedback = None;
    }

    /// Starts a new match with the turn order swapped.
    pub fn new_match(&mut self) {
        let [first, second] = self.game.players().clone();
        let swapped: [Player; 2] = [second, first];
        if let Err(e) = self.game.restart_with(swapped) {
            warn!(error = %e, "Could not start new match");
            self.feedback = Some(e.to_string());
            return;
        }
        self.feedback = None;
        self.cursor = Position::Center;
    }
}
