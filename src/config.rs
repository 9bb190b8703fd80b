//! Match configuration loaded from TOML.

use crate::engine::{Marker, Player, default_players, validate_pair};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// One `[[players]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct PlayerConfig {
    /// Display name.
    #[new(into)]
    name: String,
    /// Marker, `"X"` or `"O"`.
    marker: Marker,
}

/// Settings for a match and its front end.
///
/// ```toml
/// log_file = "noughts.log"
///
/// [[players]]
/// name = "User"
/// marker = "X"
///
/// [[players]]
/// name = "Computer"
/// marker = "O"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// The two players in turn order.
    #[serde(default = "default_player_configs")]
    players: Vec<PlayerConfig>,
}

fn default_player_configs() -> Vec<PlayerConfig> {
    default_players()
        .into_iter()
        .map(|p| PlayerConfig::new(p.name().as_str(), *p.marker()))
        .collect()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            players: default_player_configs(),
            log_file: default_log_file(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(players = config.players.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Serializes back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Overrides player names, leaving `None` entries as configured.
    #[instrument(skip(self))]
    pub fn with_names(mut self, first: Option<String>, second: Option<String>) -> Self {
        for (slot, name) in self.players.iter_mut().zip([first, second]) {
            if let Some(name) = name {
                slot.name = name;
            }
        }
        self
    }

    /// Validates the configured players into a match-ready pair.
    #[instrument(skip(self))]
    pub fn to_players(&self) -> Result<[Player; 2], ConfigError> {
        let [first, second] = self.players.as_slice() else {
            return Err(ConfigError::new(format!(
                "Expected exactly 2 players, found {}",
                self.players.len()
            )));
        };
        let pair = [
            Player::new(first.name.clone(), first.marker),
            Player::new(second.name.clone(), second.marker),
        ];
        validate_pair(&pair).map_err(|e| ConfigError::new(format!("Invalid players: {}", e)))?;
        Ok(pair)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_user_vs_computer() {
        let players = MatchConfig::default().to_players().expect("defaults are valid");
        assert_eq!(players[0], Player::new("User", Marker::X));
        assert_eq!(players[1], Player::new("Computer", Marker::O));
    }

    #[test]
    fn test_parse_players() {
        let config = MatchConfig::from_toml(
            r#"
            [[players]]
            name = "Ann"
            marker = "O"

            [[players]]
            name = "Bob"
            marker = "X"
            "#,
        )
        .expect("valid toml");
        let players = config.to_players().expect("valid players");
        assert_eq!(players[0], Player::new("Ann", Marker::O));
        assert_eq!(config.log_file(), &PathBuf::from("noughts.log"));
    }

    #[test]
    fn test_duplicate_markers_rejected() {
        let config = MatchConfig::from_toml(
            r#"
            [[players]]
            name = "Ann"
            marker = "X"

            [[players]]
            name = "Bob"
            marker = "X"
            "#,
        )
        .expect("valid toml");
        let err = config.to_players().expect_err("duplicate markers");
        assert!(err.message.contains("marker X"), "{}", err);
    }

    #[test]
    fn test_wrong_player_count_rejected() {
        let config = MatchConfig::from_toml(
            r#"
            [[players]]
            name = "Solo"
            marker = "X"
            "#,
        )
        .expect("valid toml");
        assert!(config.to_players().is_err());
    }

    #[test]
    fn test_bad_marker_is_parse_error() {
        let err = MatchConfig::from_toml("[[players]]\nname = \"A\"\nmarker = \"Z\"\n")
            .expect_err("Z is not a marker");
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_with_names_overrides() {
        let config = MatchConfig::default().with_names(None, Some("Eve".to_string()));
        let players = config.to_players().expect("valid");
        assert_eq!(players[0].name(), "User");
        assert_eq!(players[1].name(), "Eve");
    }

    #[test]
    fn test_toml_round_trip_keeps_players() {
        let config = MatchConfig::default().with_names(Some("Ann".into()), None);
        let text = config.to_toml().expect("serializable");
        assert_eq!(MatchConfig::from_toml(&text).expect("parses"), config);
    }
}
