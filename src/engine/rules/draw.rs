//! Draw detection.

use super::super::types::{Board, Cell};

/// Checks if every cell is marked.
///
/// Only a draw when [`check_winner`](super::check_winner) finds nothing.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
