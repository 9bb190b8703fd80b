//! Win detection.

use super::super::types::{Board, Cell, Marker};
use tracing::instrument;

/// Three cell indices that form a row, column or diagonal.
pub type Line = [usize; 3];

/// Every winning line, in the order they are checked.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first complete line and the marker that holds it.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board) -> Option<(Marker, Line)> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let cell = board.get(a)?;
        match cell {
            Cell::Marked(marker) if board.get(b) == Some(cell) && board.get(c) == Some(cell) => {
                Some((marker, line))
            }
            _ => None,
        }
    })
}

/// Returns the marker holding the first complete line, if any.
pub fn check_winner(board: &Board) -> Option<Marker> {
    winning_line(board).map(|(marker, _)| marker)
}
