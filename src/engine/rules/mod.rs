//! Outcome evaluation.
//!
//! Pure functions over a [`Board`] snapshot. Nothing here holds state or
//! mutates the board, so evaluating the same board twice always gives the
//! same answer.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, check_winner, winning_line};

use super::types::{Board, Outcome};
use tracing::instrument;

/// Decides whether `board` is won, drawn or still ongoing.
///
/// Lines are checked in [`LINES`] order and the first complete one wins.
/// A full board without a complete line is a draw.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(marker) = check_winner(board) {
        Outcome::Win(marker)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
