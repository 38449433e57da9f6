//! History consistency invariant: one history entry per filled cell.

use std::collections::HashSet;

use super::super::RoundInProgress;
use super::Invariant;

/// Invariant: no position is played twice and the history length equals
/// the number of filled cells.
pub struct HistoryConsistentInvariant;

impl Invariant<RoundInProgress> for HistoryConsistentInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let history = round.history();
        let distinct: HashSet<_> = history.iter().map(|m| m.position).collect();

        distinct.len() == history.len() && history.len() == round.board().filled_count()
    }

    fn description() -> &'static str {
        "History has one entry per filled cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Move, Position, Symbol};

    #[test]
    fn test_new_round_holds() {
        assert!(HistoryConsistentInvariant::holds(&RoundInProgress::new()));
    }

    #[test]
    fn test_repeated_position_violates() {
        let mut round = RoundInProgress::new();
        round.history = vec![
            Move::new(Symbol::X, Position::Center),
            Move::new(Symbol::O, Position::Center),
        ];
        assert!(!HistoryConsistentInvariant::holds(&round));
    }

    #[test]
    fn test_missing_history_violates() {
        let mut round = RoundInProgress::new();
        round.to_move = Symbol::O;
        round.history.clear();
        round
            .board
            .set(Position::Center, crate::engine::Cell::Occupied(Symbol::X));
        assert!(!HistoryConsistentInvariant::holds(&round));
    }
}
