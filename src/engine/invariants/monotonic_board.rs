//! Monotonic board invariant: cells never change once filled.

use super::super::{Board, Cell, RoundInProgress};
use super::Invariant;

/// Invariant: the board is exactly the history replayed onto an empty board.
///
/// Each replayed move must land on an empty cell.
pub struct MonotonicBoardInvariant;

impl Invariant<RoundInProgress> for MonotonicBoardInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let mut reconstructed = Board::new();

        for action in round.history() {
            if !reconstructed.is_empty(action.position) {
                return false;
            }
            reconstructed.set(action.position, Cell::Occupied(action.symbol));
        }

        reconstructed == *round.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
