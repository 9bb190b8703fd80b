//! Game-state engine: board, outcome rules, turn sequencing and matches.

mod action;
mod board_state;
mod player;
mod position;
pub mod rules;
mod sequencer;
mod session;
mod types;

pub use action::{MatchSetupError, Move, MoveRejection};
pub use board_state::BoardState;
pub use player::{Player, default_players, validate_pair};
pub use position::Position;
pub use sequencer::{MoveReport, Phase, TurnSequencer};
pub use session::Match;
pub use types::{Board, CELL_COUNT, Cell, Marker, Outcome};
