//! Turn order and match termination.

use super::action::{MatchSetupError, Move, MoveRejection};
use super::board_state::BoardState;
use super::player::{Player, default_players, validate_pair};
use super::rules;
use super::types::Outcome;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player at this index (0 or 1) to move.
    AwaitingMove(usize),
    /// The match ended. Always `Win` or `Draw`.
    Finished(Outcome),
}

/// Answer to a move request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// The move that was applied, or why it was refused.
    pub result: Result<Move, MoveRejection>,
    /// Outcome after handling the request.
    pub outcome: Outcome,
    /// Who moves next; `None` once the match is over.
    pub current_player: Option<Player>,
}

impl MoveReport {
    /// Returns true when the move changed the board.
    pub fn accepted(&self) -> bool {
        self.result.is_ok()
    }

    /// The applied move, if accepted.
    pub fn applied(&self) -> Option<Move> {
        self.result.ok()
    }

    /// Why the move was refused, if it was.
    pub fn rejection(&self) -> Option<MoveRejection> {
        self.result.err()
    }

    /// Converts the report into the outcome, or the rejection as an error.
    pub fn into_result(self) -> Result<Outcome, MoveRejection> {
        let outcome = self.outcome;
        self.result.map(|_| outcome)
    }
}

/// Tracks whose turn it is and when the match is over.
///
/// The sequencer never touches cells itself: it asks the [`BoardState`] to
/// place a marker and then evaluates the resulting snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSequencer {
    players: [Player; 2],
    phase: Phase,
}

impl TurnSequencer {
    /// Creates a sequencer waiting on the first player.
    #[instrument(skip(players))]
    pub fn new(players: [Player; 2]) -> Result<Self, MatchSetupError> {
        validate_pair(&players)?;
        Ok(Self {
            players,
            phase: Phase::AwaitingMove(0),
        })
    }

    /// Replaces the players and starts over with the first one.
    ///
    /// The caller is responsible for resetting the board.
    #[instrument(skip(self, players))]
    pub fn start_new_match(&mut self, players: [Player; 2]) -> Result<(), MatchSetupError> {
        validate_pair(&players)?;
        self.players = players;
        self.restart();
        Ok(())
    }

    /// Starts over with the same players.
    pub fn restart(&mut self) {
        self.phase = Phase::AwaitingMove(0);
        info!(first = %self.players[0], second = %self.players[1], "Match started");
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The fixed player pair.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player expected to move, or `None` once the match is finished.
    pub fn current_player(&self) -> Option<&Player> {
        match self.phase {
            Phase::AwaitingMove(index) => self.players.get(index),
            Phase::Finished(_) => None,
        }
    }

    /// `Ongoing` while awaiting a move, otherwise the final outcome.
    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::AwaitingMove(_) => Outcome::Ongoing,
            Phase::Finished(outcome) => outcome,
        }
    }

    /// Handles a move request for the current player.
    ///
    /// Rejected requests leave both the board and the phase unchanged.
    #[instrument(skip(self, board), fields(phase = ?self.phase))]
    pub fn request_move(&mut self, board: &mut BoardState, cell: usize) -> MoveReport {
        let Phase::AwaitingMove(index) = self.phase else {
            debug!("Move after the match ended");
            return self.report(Err(MoveRejection::GameAlreadyFinished));
        };

        let marker = *self.players[index].marker();
        if let Err(rejection) = board.try_place(cell, marker) {
            debug!(%rejection, "Move rejected");
            return self.report(Err(rejection));
        }
        let applied = Move::new(index, marker, cell);

        // Evaluate before flipping so a winning move is credited to its mover.
        let outcome = rules::evaluate(&board.snapshot());
        self.phase = if outcome.is_terminal() {
            info!(%outcome, "Match finished");
            Phase::Finished(outcome)
        } else {
            Phase::AwaitingMove(1 - index)
        };
        debug!(%applied, phase = ?self.phase, "Move accepted");

        self.report(Ok(applied))
    }

    fn report(&self, result: Result<Move, MoveRejection>) -> MoveReport {
        MoveReport {
            result,
            outcome: self.outcome(),
            current_player: self.current_player().cloned(),
        }
    }
}

impl Default for TurnSequencer {
    fn default() -> Self {
        Self {
            players: default_players(),
            phase: Phase::AwaitingMove(0),
        }
    }
}
