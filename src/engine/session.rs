//! A single match: one board, one sequencer, one move history.

use super::action::{MatchSetupError, Move};
use super::board_state::BoardState;
use super::player::Player;
use super::rules::{self, Line};
use super::sequencer::{MoveReport, Phase, TurnSequencer};
use super::types::{Board, Marker, Outcome};
use tracing::{info, instrument};

/// An owned, self-contained match.
///
/// Every `Match` has its own grid and turn state, so any number of them can
/// exist side by side. Front ends call operations and render from the
/// returned [`MoveReport`] or [`snapshot_board`](Self::snapshot_board).
///
/// `Match::default()` pits [`default_players`](super::default_players)
/// against each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Match {
    board: BoardState,
    sequencer: TurnSequencer,
    history: Vec<Move>,
}

impl Match {
    /// Creates a match between two players; the first one moves first.
    #[instrument(skip(players), fields(first = %players[0], second = %players[1]))]
    pub fn new(players: [Player; 2]) -> Result<Self, MatchSetupError> {
        let sequencer = TurnSequencer::new(players)?;
        info!("Match created");
        Ok(Self {
            board: BoardState::new(),
            sequencer,
            history: Vec::new(),
        })
    }

    /// Creates a match from names and markers.
    pub fn start_new_match(
        first_name: impl Into<String>,
        first_marker: Marker,
        second_name: impl Into<String>,
        second_marker: Marker,
    ) -> Result<Self, MatchSetupError> {
        Self::new([
            Player::new(first_name, first_marker),
            Player::new(second_name, second_marker),
        ])
    }

    /// Starts over with a new pair of players.
    ///
    /// On error the running match is left untouched.
    #[instrument(skip(self, players))]
    pub fn restart_with(&mut self, players: [Player; 2]) -> Result<(), MatchSetupError> {
        self.sequencer.start_new_match(players)?;
        self.board.reset();
        self.history.clear();
        Ok(())
    }

    /// Starts over with the same players.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) {
        self.board.reset();
        self.history.clear();
        self.sequencer.restart();
    }

    /// Requests a move at `cell` for the player whose turn it is.
    #[instrument(skip(self))]
    pub fn request_move(&mut self, cell: usize) -> MoveReport {
        let report = self.sequencer.request_move(&mut self.board, cell);
        if let Ok(applied) = report.result {
            self.history.push(applied);
        }
        report
    }

    /// Copy of the current board.
    pub fn snapshot_board(&self) -> Board {
        self.board.snapshot()
    }

    /// Player expected to move, `None` once finished.
    pub fn current_player(&self) -> Option<&Player> {
        self.sequencer.current_player()
    }

    /// The two players in turn order.
    pub fn players(&self) -> &[Player; 2] {
        self.sequencer.players()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.sequencer.outcome()
    }

    /// Checks if the match has ended.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase(), Phase::Finished(_))
    }

    /// Player who won, if any.
    pub fn winner(&self) -> Option<&Player> {
        let marker = self.outcome().winner()?;
        self.players().iter().find(|p| *p.marker() == marker)
    }

    /// The completed line, if the match was won.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(&self.board.snapshot()).map(|(_, line)| line)
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Describes whose turn it is, or how the match ended.
    pub fn status_line(&self) -> String {
        if let Some(player) = self.current_player() {
            return format!("{} to move", player);
        }
        match self.winner() {
            Some(winner) => format!("{} wins!", winner),
            None => "Draw!".to_string(),
        }
    }
}
