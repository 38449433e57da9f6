//! Result of evaluating a board.

use serde::{Deserialize, Serialize};

use super::Symbol;
use super::rules::WinningLine;

/// What a board says about the round.
///
/// Always derived from a board by [`evaluate`](super::evaluate), never stored
/// independently of the board it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No line completed and at least one empty cell.
    InProgress,
    /// `symbol` holds all three cells of `line`.
    Won {
        /// The winning symbol.
        symbol: Symbol,
        /// The first completed line in enumeration order.
        line: WinningLine,
    },
    /// Board full with no completed line.
    Draw,
}

impl GameResult {
    /// Returns the winning symbol, if any.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            GameResult::Won { symbol, .. } => Some(*symbol),
            _ => None,
        }
    }

    /// Returns the completed line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameResult::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns true if the round ended in a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Won { symbol, line } => write!(f, "{} wins on {}", symbol, line),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}
