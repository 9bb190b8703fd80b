//! Noughts - a two-player 3x3 marking game
//!
//! The engine is a plain library: front ends turn input into a cell index,
//! call into a [`Match`], and render from the returned [`MoveReport`] or a
//! board snapshot.
//!
//! # Architecture
//!
//! - **BoardState**: owns the nine cells and refuses illegal placements
//! - **rules**: pure outcome evaluation (win, draw, ongoing)
//! - **TurnSequencer**: turn order and match termination
//! - **Match**: one board plus one sequencer, owned per match
//! - **tui**: terminal front end built on the above
//!
//! # Example
//!
//! ```
//! use noughts::{Marker, Match, Outcome};
//!
//! let mut game = Match::start_new_match("Ann", Marker::X, "Bob", Marker::O)?;
//! for cell in [0, 1, 3, 4, 6] {
//!     game.request_move(cell);
//! }
//! assert_eq!(game.outcome(), Outcome::Win(Marker::X));
//! assert!(!game.request_move(8).accepted());
//! # Ok::<(), noughts::MatchSetupError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod engine;
pub mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig, PlayerConfig};

// Crate-level exports - Engine
pub use engine::{
    Board, BoardState, CELL_COUNT, Cell, Marker, Match, MatchSetupError, Move, MoveRejection,
    MoveReport, Outcome, Phase, Player, Position, TurnSequencer, default_players, rules,
};
