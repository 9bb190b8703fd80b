//! Noughts - CLI entry point

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{Match, MatchConfig, replay, tui};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = MatchConfig::load(cli.config.as_deref())?.with_names(cli.first, cli.second);

    match cli.command.unwrap_or(Command::Play { log_file: None }) {
        Command::Play { log_file } => run_play(config, log_file),
        Command::Replay { cells, json } => run_replay(config, &cells, json),
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Run the terminal UI, logging to a file so the screen stays clean
fn run_play(config: MatchConfig, log_file: Option<PathBuf>) -> Result<()> {
    let log_path = log_file.unwrap_or_else(|| config.log_file().clone());
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let game = Match::new(config.to_players()?)?;
    tui::run(tui::App::new(game))
}

/// Run a scripted match and print it to stdout
fn run_replay(config: MatchConfig, cells: &[String], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cells = replay::parse_cells(cells)?;
    let mut game = Match::new(config.to_players()?)?;
    let reports = replay::replay(&mut game, &cells);
    info!(outcome = %game.outcome(), "Replay complete");

    let stdout = std::io::stdout();
    replay::write_summary(&mut stdout.lock(), &game, &cells, &reports, json)
}
