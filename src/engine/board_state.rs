//! Owner of cell occupancy.

use super::action::MoveRejection;
use super::types::{Board, Cell, Marker};
use tracing::{debug, instrument};

/// The single mutable grid of a match.
///
/// Cells only change through [`place`](Self::place) /
/// [`try_place`](Self::try_place) and [`reset`](Self::reset).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    board: Board,
}

impl BoardState {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current cells.
    pub fn snapshot(&self) -> Board {
        self.board
    }

    /// Marks `index` with `marker` if it is on the board and empty.
    ///
    /// Returns `false` and leaves the grid untouched otherwise.
    pub fn place(&mut self, index: usize, marker: Marker) -> bool {
        self.try_place(index, marker).is_ok()
    }

    /// Like [`place`](Self::place), but reports why a placement was refused.
    #[instrument(skip(self))]
    pub fn try_place(&mut self, index: usize, marker: Marker) -> Result<(), MoveRejection> {
        match self.board.get(index) {
            None => Err(MoveRejection::IllegalIndex(index)),
            Some(Cell::Marked(_)) => Err(MoveRejection::CellOccupied(index)),
            Some(Cell::Empty) => {
                self.board.set(index, Cell::Marked(marker));
                debug!(index, %marker, "Cell marked");
                Ok(())
            }
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
    }
}
