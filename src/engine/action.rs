//! Moves and the reasons a move or a match setup can be refused.

use super::types::Marker;
use serde::{Deserialize, Serialize};

/// An accepted move: which player marked which cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Index of the mover in the match's player pair (0 or 1).
    pub player_index: usize,
    /// Marker that was placed.
    pub marker: Marker,
    /// Cell that was marked (0-8).
    pub cell: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.cell)
    }
}

/// Why a move request was not accepted.
///
/// These are ordinary results, not faults: the board and turn are left
/// exactly as they were.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Error,
)]
pub enum MoveRejection {
    /// Cell index outside 0-8.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    IllegalIndex(#[error(not(source))] usize),

    /// Cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] usize),

    /// The match has a winner or ended in a draw.
    #[display("Game is already over")]
    GameAlreadyFinished,
}

/// Why a match could not be started with the given players.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MatchSetupError {
    /// Both players were given the same marker.
    #[display("Both players cannot use marker {}", _0)]
    DuplicateMarker(#[error(not(source))] Marker),

    /// A player name was empty or whitespace.
    #[display("Player {} has an empty name", _0)]
    BlankName(#[error(not(source))] usize),
}
