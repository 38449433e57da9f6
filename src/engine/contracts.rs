//! Contract-based validation for moves within a round.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}

use tracing::{instrument, warn};

use super::invariants::RoundInvariants;
use super::round::RoundInProgress;
use super::{Cell, IllegalMove, Move};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IllegalMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), IllegalMove>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the target cell must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition.
    #[instrument(skip(round))]
    pub fn check(action: &Move, round: &RoundInProgress) -> Result<(), IllegalMove> {
        if round.board().is_empty(action.position) {
            Ok(())
        } else {
            Err(IllegalMove::SquareOccupied(action.position))
        }
    }
}

/// Precondition: it must be the symbol's turn.
pub struct SymbolsTurn;

impl SymbolsTurn {
    /// Checks the precondition.
    #[instrument(skip(round))]
    pub fn check(action: &Move, round: &RoundInProgress) -> Result<(), IllegalMove> {
        if action.symbol == round.to_move() {
            Ok(())
        } else {
            Err(IllegalMove::WrongSymbol(action.symbol))
        }
    }
}

/// Composite precondition: empty cell and correct turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(round))]
    pub fn check(action: &Move, round: &RoundInProgress) -> Result<(), IllegalMove> {
        SquareIsEmpty::check(action, round)?;
        SymbolsTurn::check(action, round)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for moves.
///
/// Preconditions:
/// - Cell must be empty
/// - Must be the symbol's turn
///
/// Postconditions:
/// - Exactly one cell went from empty to occupied
/// - Round invariants hold on the new state
pub struct MoveContract;

impl Contract<RoundInProgress, Move> for MoveContract {
    fn pre(round: &RoundInProgress, action: &Move) -> Result<(), IllegalMove> {
        LegalMove::check(action, round)
    }

    fn post(before: &RoundInProgress, after: &RoundInProgress) -> Result<(), IllegalMove> {
        let changed: Vec<_> = before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .filter(|(b, a)| b != a)
            .collect();
        let single_fill = matches!(changed.as_slice(), [(Cell::Empty, Cell::Occupied(_))]);
        if !single_fill {
            warn!(changed = changed.len(), "Move did not fill exactly one cell");
            return Err(IllegalMove::InvariantViolation(
                "Postcondition failed: move must fill exactly one empty cell".to_string(),
            ));
        }

        RoundInvariants::check(after)
    }
}
