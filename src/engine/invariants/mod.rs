//! Properties every round in progress must satisfy.
//!
//! Each invariant is a standalone predicate over [`RoundInProgress`].
//! [`RoundInvariants`] runs all of them after a move and turns any failure
//! into an [`IllegalMove::InvariantViolation`].

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

use tracing::{instrument, warn};

use super::{IllegalMove, RoundInProgress};

/// A property of a round that no legal move can break.
pub trait Invariant<S> {
    /// True if the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// What the property guarantees, reported when it fails.
    fn description() -> &'static str;
}

/// Every round invariant, checked together.
pub struct RoundInvariants;

impl RoundInvariants {
    /// Checks monotonic board, alternating turns, and history consistency.
    ///
    /// All failures are reported in one message, separated by `"; "`.
    #[instrument(skip(round), fields(moves = round.history().len()))]
    pub fn check(round: &RoundInProgress) -> Result<(), IllegalMove> {
        let checks = [
            (
                MonotonicBoardInvariant::holds(round),
                MonotonicBoardInvariant::description(),
            ),
            (
                AlternatingTurnInvariant::holds(round),
                AlternatingTurnInvariant::description(),
            ),
            (
                HistoryConsistentInvariant::holds(round),
                HistoryConsistentInvariant::description(),
            ),
        ];

        let failed: Vec<&str> = checks
            .into_iter()
            .filter(|(holds, _)| !holds)
            .map(|(_, description)| description)
            .collect();
        if failed.is_empty() {
            return Ok(());
        }

        let descriptions = failed.join("; ");
        warn!("Round invariants violated: {}", descriptions);
        Err(IllegalMove::InvariantViolation(descriptions))
    }
}
