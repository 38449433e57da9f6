//! Single-flight transition gate.
//!
//! Gated operations run in two phases. Accepting a request takes the lock
//! and hands back a [`PendingTransition`]; committing that ticket applies the
//! mutation and releases the lock. While the lock is held every other request
//! is dropped, never queued.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::engine::Position;

/// Work that passes through the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum TransitionKind {
    /// Setup to the first round.
    #[display("start round")]
    StartRound,
    /// Place the active symbol.
    #[display("move at {}", _0)]
    SubmitMove(Position),
    /// Round over to a fresh round.
    #[display("next round")]
    StartNextRound,
    /// Back to setup.
    #[display("session reset")]
    ResetSession,
}

/// Source of gate identities, unique within the process.
static NEXT_GATE_ID: AtomicU64 = AtomicU64::new(1);

/// An accepted transition waiting to be committed.
///
/// Only the gate creates these, and committing consumes one. A ticket is
/// bound to the gate that issued it.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingTransition {
    gate: u64,
    ticket: u64,
    kind: TransitionKind,
    delay: Duration,
}

impl PendingTransition {
    /// Sequence number of this transition within its session.
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// What will happen on commit.
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// How long to wait before committing.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// The transition lock.
#[derive(Debug)]
pub struct TransitionGate {
    id: u64,
    in_flight: Option<(u64, TransitionKind)>,
    issued: u64,
}

impl TransitionGate {
    /// Creates an unlocked gate with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: NEXT_GATE_ID.fetch_add(1, Ordering::Relaxed),
            in_flight: None,
            issued: 0,
        }
    }

    /// True while a transition is in flight.
    pub fn is_locked(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The transition holding the lock, if any.
    pub fn in_flight(&self) -> Option<TransitionKind> {
        self.in_flight.map(|(_, kind)| kind)
    }

    /// Takes the lock for `kind`.
    ///
    /// Fails with the kind already in flight if the lock is held.
    #[instrument(skip(self))]
    pub(crate) fn acquire(
        &mut self,
        kind: TransitionKind,
        delay: Duration,
    ) -> Result<PendingTransition, TransitionKind> {
        if let Some((_, current)) = self.in_flight {
            warn!(%current, "Transition gate busy");
            return Err(current);
        }

        self.issued += 1;
        let ticket = self.issued;
        self.in_flight = Some((ticket, kind));
        debug!(gate = self.id, ticket, "Transition gate acquired");
        Ok(PendingTransition {
            gate: self.id,
            ticket,
            kind,
            delay,
        })
    }

    /// True if `pending` was issued by this gate and holds the lock.
    pub(crate) fn admits(&self, pending: &PendingTransition) -> bool {
        pending.gate == self.id && self.in_flight == Some((pending.ticket, pending.kind))
    }

    /// Releases the lock held by `pending`.
    #[instrument(skip(self, pending), fields(ticket = pending.ticket))]
    pub(crate) fn release(&mut self, pending: PendingTransition) {
        if self.admits(&pending) {
            self.in_flight = None;
            debug!("Transition gate released");
        }
    }
}

impl Default for TransitionGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_is_rejected() {
        let mut gate = TransitionGate::new();
        let pending = gate
            .acquire(TransitionKind::StartRound, Duration::ZERO)
            .expect("unlocked gate");
        assert!(gate.is_locked());
        assert_eq!(
            gate.acquire(TransitionKind::ResetSession, Duration::ZERO),
            Err(TransitionKind::StartRound)
        );

        gate.release(pending);
        assert!(!gate.is_locked());
        assert!(gate.acquire(TransitionKind::ResetSession, Duration::ZERO).is_ok());
    }

    #[test]
    fn test_tickets_increase() {
        let mut gate = TransitionGate::new();
        let first = gate
            .acquire(TransitionKind::StartRound, Duration::ZERO)
            .expect("unlocked gate");
        let first_ticket = first.ticket();
        gate.release(first);
        let second = gate
            .acquire(TransitionKind::StartNextRound, Duration::ZERO)
            .expect("unlocked gate");
        assert!(second.ticket() > first_ticket);
    }

    #[test]
    fn test_foreign_ticket_not_admitted() {
        let mut ours = TransitionGate::new();
        let mut theirs = TransitionGate::new();
        let held = ours
            .acquire(TransitionKind::StartRound, Duration::ZERO)
            .expect("unlocked gate");
        // Same ticket number and kind, different gate.
        let foreign = theirs
            .acquire(TransitionKind::StartRound, Duration::ZERO)
            .expect("unlocked gate");
        assert_eq!(foreign.ticket(), held.ticket());

        assert!(!ours.admits(&foreign));
        ours.release(foreign);
        assert!(ours.is_locked());

        assert!(ours.admits(&held));
        ours.release(held);
        assert!(!ours.is_locked());
    }
}
