//! First-class move type and move errors.
//!
//! Moves are domain events: a symbol placed at a position. They can be
//! validated independently of being applied.

use derive_new::new;
use serde::{Deserialize, Serialize};

use super::{Position, Symbol};

/// A symbol placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The symbol being placed.
    pub symbol: Symbol,
    /// Where it is placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.position.label())
    }
}

/// A move that breaks the rules. Rejecting one never mutates the board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// Index is not in 0-8.
    #[display("Index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board already has a result.
    #[display("Round is already over")]
    GameOver,

    /// It's not this symbol's turn.
    #[display("It's not {}'s turn", _0)]
    WrongSymbol(Symbol),

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for IllegalMove {}
