//! Typestate rounds.
//!
//! A round in progress and a finished round are distinct types. A finished
//! round ALWAYS carries a terminal result; a round in progress always has a
//! symbol to move. [`Round`] joins them for storage.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::contracts::{Contract, MoveContract};
use super::{Board, GameResult, IllegalMove, Move, Position, Symbol, rules};

// ─────────────────────────────────────────────────────────────
//  InProgress
// ─────────────────────────────────────────────────────────────

/// Round that still accepts moves.
///
/// X always moves first; the symbol to move alternates after every move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Symbol,
}

impl RoundInProgress {
    /// Starts a round on an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            to_move: Symbol::X,
        }
    }

    /// Plays the symbol to move at `position`.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&self, position: Position) -> Result<Round, IllegalMove> {
        self.apply(Move::new(self.to_move, position))
    }

    /// Applies an explicit move, returning the next round state.
    ///
    /// `self` is left unchanged whether or not the move is legal.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self))]
    pub fn apply(&self, action: Move) -> Result<Round, IllegalMove> {
        MoveContract::pre(self, &action)?;

        let board = rules::apply_move(&self.board, action.position.to_index(), action.symbol)?;
        let mut history = self.history.clone();
        history.push(action);

        let result = rules::evaluate(&board);
        debug!(%action, %result, "Move applied");

        if result.is_terminal() {
            return Ok(Round::Finished(RoundFinished {
                board,
                history,
                result,
            }));
        }

        let next = RoundInProgress {
            board,
            history,
            to_move: action.symbol.opponent(),
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        Ok(Round::InProgress(next))
    }

    /// Rebuilds a round from a move list, starting with X.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Round, IllegalMove> {
        let mut round = Round::InProgress(RoundInProgress::new());
        for action in moves {
            round = match round {
                Round::InProgress(r) => r.apply(*action)?,
                Round::Finished(_) => return Err(IllegalMove::GameOver),
            };
        }
        Ok(round)
    }

    /// Returns the symbol to move.
    pub fn to_move(&self) -> Symbol {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }
}

impl Default for RoundInProgress {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished
// ─────────────────────────────────────────────────────────────

/// Round with a terminal result. The board is frozen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundFinished {
    board: Board,
    history: Vec<Move>,
    result: GameResult,
}

impl RoundFinished {
    /// Returns the result (`Won` or `Draw`, never `InProgress`).
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Returns the winning symbol, if the round was won.
    pub fn winner(&self) -> Option<Symbol> {
        self.result.winner()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

// ─────────────────────────────────────────────────────────────
//  Round
// ─────────────────────────────────────────────────────────────

/// A round in either phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Round {
    /// Round continues.
    InProgress(RoundInProgress),
    /// Round finished.
    Finished(RoundFinished),
}

impl Round {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        match self {
            Round::InProgress(r) => r.board(),
            Round::Finished(r) => r.board(),
        }
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        match self {
            Round::InProgress(r) => r.history(),
            Round::Finished(r) => r.history(),
        }
    }

    /// Returns the result of the board.
    pub fn result(&self) -> GameResult {
        match self {
            Round::InProgress(_) => GameResult::InProgress,
            Round::Finished(r) => r.result(),
        }
    }

    /// Returns the symbol to move, if the round is still in progress.
    pub fn active_turn(&self) -> Option<Symbol> {
        match self {
            Round::InProgress(r) => Some(r.to_move()),
            Round::Finished(_) => None,
        }
    }

    /// Returns true once the round has a terminal result.
    pub fn is_finished(&self) -> bool {
        matches!(self, Round::Finished(_))
    }
}
