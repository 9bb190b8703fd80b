//! Match participants.

use super::action::MatchSetupError;
use super::types::Marker;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A participant: display name plus the marker they place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display label.
    name: String,
    /// Marker placed by this player.
    marker: Marker,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}

/// "User" as X against "Computer" as O.
pub fn default_players() -> [Player; 2] {
    [Player::new("User", Marker::X), Player::new("Computer", Marker::O)]
}

/// Checks that a pair of players can share a match.
#[instrument(skip(players))]
pub fn validate_pair(players: &[Player; 2]) -> Result<(), MatchSetupError> {
    for (i, player) in players.iter().enumerate() {
        if player.name.trim().is_empty() {
            return Err(MatchSetupError::BlankName(i));
        }
    }
    if players[0].marker == players[1].marker {
        return Err(MatchSetupError::DuplicateMarker(players[0].marker));
    }
    Ok(())
}
