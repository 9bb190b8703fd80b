//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player 3x3 marking game
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play noughts and crosses in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML match config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the first player's name
    #[arg(long, global = true)]
    pub first: Option<String>,

    /// Override the second player's name
    #[arg(long, global = true)]
    pub second: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat match in the terminal UI
    Play {
        /// Log file (overrides the config's `log_file`)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply moves to a fresh match and print the result
    Replay {
        /// Cells as indices 0-8 or labels such as `center` or `top-left`
        #[arg(required = true)]
        cells: Vec<String>,

        /// Print one JSON object per move instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["noughts"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_replay_args() {
        let args = ["noughts", "replay", "0", "center", "--json", "--first", "Ann"];
        let cli = Cli::try_parse_from(args).expect("parses");
        assert_eq!(cli.first.as_deref(), Some("Ann"));
        match cli.command {
            Some(Command::Replay { cells, json }) => {
                assert_eq!(cells, vec!["0", "center"]);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_replay_requires_cells() {
        assert!(Cli::try_parse_from(["noughts", "replay"]).is_err());
    }
}
