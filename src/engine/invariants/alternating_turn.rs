//! Alternating turn invariant: X, O, X, O, ...

use super::super::{RoundInProgress, Symbol};
use super::Invariant;

/// Invariant: symbols alternate, starting with X.
///
/// The symbol to move must follow from the history length.
pub struct AlternatingTurnInvariant;

impl Invariant<RoundInProgress> for AlternatingTurnInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let history = round.history();

        if history.first().is_some_and(|first| first.symbol != Symbol::X) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].symbol == pair[1].symbol) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Symbol::X
        } else {
            Symbol::O
        };
        round.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Symbols alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Move, Position, Round};

    #[test]
    fn test_new_round_holds() {
        assert!(AlternatingTurnInvariant::holds(&RoundInProgress::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let moves = [
            Move::new(Symbol::X, Position::TopLeft),
            Move::new(Symbol::O, Position::Center),
            Move::new(Symbol::X, Position::TopRight),
            Move::new(Symbol::O, Position::BottomLeft),
        ];
        let Ok(Round::InProgress(round)) = RoundInProgress::replay(&moves) else {
            panic!("Expected round in progress");
        };
        assert!(AlternatingTurnInvariant::holds(&round));
        assert_eq!(round.to_move(), Symbol::X);
    }

    #[test]
    fn test_same_symbol_twice_violates() {
        let mut round = RoundInProgress::new();
        round.history = vec![
            Move::new(Symbol::X, Position::TopLeft),
            Move::new(Symbol::X, Position::Center),
        ];
        assert!(!AlternatingTurnInvariant::holds(&round));
    }

    #[test]
    fn test_wrong_to_move_violates() {
        let mut round = RoundInProgress::new();
        round.to_move = Symbol::O;
        assert!(!AlternatingTurnInvariant::holds(&round));
    }
}
