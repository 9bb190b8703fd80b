//! Scripted play: apply a list of cells to a match and print the result.

use crate::engine::{Match, MoveReport, Position};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{info, instrument};

/// Parses cells given as indices or position labels.
///
/// Numbers pass through untouched, so an index off the board reaches the
/// match and comes back as an ordinary rejection. Only text that is neither
/// a number nor a label is an error.
#[instrument]
pub fn parse_cells(inputs: &[String]) -> Result<Vec<usize>> {
    inputs
        .iter()
        .map(|input| {
            if let Ok(index) = input.trim().parse::<usize>() {
                return Ok(index);
            }
            Position::from_label_or_number(input)
                .map(Position::to_index)
                .with_context(|| {
                    format!("Unknown cell '{}' (use 0-8 or a label like 'center')", input)
                })
        })
        .collect()
}

/// Requests each cell in turn, collecting every report.
///
/// Rejected moves are reported and play continues, just as a click on an
/// occupied cell would be ignored.
#[instrument(skip(game))]
pub fn replay(game: &mut Match, cells: &[usize]) -> Vec<MoveReport> {
    let reports: Vec<_> = cells.iter().map(|&cell| game.request_move(cell)).collect();
    info!(
        requested = cells.len(),
        accepted = reports.iter().filter(|r| r.accepted()).count(),
        outcome = %game.outcome(),
        "Replay finished"
    );
    reports
}

/// Writes the reports followed by the final board and status.
///
/// With `json`, writes one JSON object per report instead of text, then the
/// board as a final JSON line.
pub fn write_summary(
    out: &mut impl Write,
    game: &Match,
    cells: &[usize],
    reports: &[MoveReport],
    json: bool,
) -> Result<()> {
    if json {
        for report in reports {
            writeln!(out, "{}", serde_json::to_string(report)?)?;
        }
        writeln!(out, "{}", serde_json::to_string(&game.snapshot_board())?)?;
        return Ok(());
    }

    for (cell, report) in cells.iter().zip(reports) {
        match &report.result {
            Ok(applied) => writeln!(out, "{}", applied)?,
            Err(rejection) => writeln!(out, "{}: rejected ({})", cell, rejection)?,
        }
    }
    writeln!(out)?;
    writeln!(out, "{}", game.snapshot_board())?;
    writeln!(out)?;
    writeln!(out, "{}", game.status_line())?;
    Ok(())
}
