//! Read-only view of a session for the presentation layer.

use derive_getters::Getters;
use serde::Serialize;

use super::gate::TransitionKind;
use super::phase::SessionPhase;
use super::players::{Player, Roster};
use super::score::Score;
use crate::engine::{Board, GameResult, Position, Symbol};

/// Immutable picture of a session at one instant.
///
/// Collaborators render from snapshots and never write back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct SessionSnapshot {
    /// Lifecycle phase.
    phase: SessionPhase,
    /// Current board; `None` during setup.
    board: Option<Board>,
    /// Wins per symbol.
    score: Score,
    /// Player one, then player two.
    players: [Player; 2],
    /// Symbol to move; `None` outside a round in progress.
    active_turn: Option<Symbol>,
    /// Result of the current board; `None` during setup.
    result: Option<GameResult>,
    /// True while a transition is in flight.
    transition_lock: bool,
    /// The transition in flight, if any.
    in_flight: Option<TransitionKind>,
    /// Rounds completed since the last reset.
    rounds_played: u32,
    /// Player holding the active symbol.
    current_player: Option<Player>,
    /// Player holding the winning symbol.
    winner: Option<Player>,
    /// Empty cells that accept a move.
    available_moves: Vec<Position>,
}

impl SessionSnapshot {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        phase: SessionPhase,
        board: Option<Board>,
        score: Score,
        roster: &Roster,
        active_turn: Option<Symbol>,
        result: Option<GameResult>,
        in_flight: Option<TransitionKind>,
        rounds_played: u32,
    ) -> Self {
        let players = roster.players().map(Player::clone);
        let current_player = active_turn.map(|symbol| roster.holder(symbol).clone());
        let winner = result
            .and_then(|r| r.winner())
            .map(|symbol| roster.holder(symbol).clone());
        let available_moves = match (&board, active_turn) {
            (Some(board), Some(_)) => Position::valid_moves(board),
            _ => Vec::new(),
        };

        Self {
            phase,
            board,
            score,
            players,
            active_turn,
            result,
            transition_lock: in_flight.is_some(),
            in_flight,
            rounds_played,
            current_player,
            winner,
            available_moves,
        }
    }

    /// Cells of the winning line, for highlighting.
    pub fn winning_cells(&self) -> Option<[Position; 3]> {
        self.result
            .and_then(|r| r.winning_line())
            .map(|line| line.positions())
    }

    /// True if a move at `position` would currently be accepted.
    pub fn accepts_move(&self, position: Position) -> bool {
        !self.transition_lock && self.available_moves.contains(&position)
    }

    /// Serializes the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
