//! Game engine: board, move legality, result evaluation, and rounds.
//!
//! Everything here is pure and deterministic.

mod action;
mod contracts;
mod invariants;
mod outcome;
mod position;
mod round;
pub mod rules;
mod types;

pub use action::{IllegalMove, Move};
pub use contracts::{Contract, LegalMove, MoveContract, SquareIsEmpty, SymbolsTurn};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, MonotonicBoardInvariant,
    RoundInvariants,
};
pub use outcome::GameResult;
pub use position::Position;
pub use round::{Round, RoundFinished, RoundInProgress};
pub use rules::{WinningLine, apply_move, evaluate};
pub use types::{Board, Cell, Symbol};
