//! Session error types.
//!
//! Every error here is recoverable: after a rejection the session is still in
//! the last state it reached.

use derive_more::{Display, Error, From};
use tracing::instrument;

use super::gate::TransitionKind;
use super::phase::SessionPhase;
use crate::engine::IllegalMove;

/// Invalid player setup or config text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Configuration error: {} at {}:{}", message, file, line)]
pub struct ConfigurationError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigurationError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Session entry points, named in rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Command {
    /// Set names and symbols.
    #[display("configure players")]
    ConfigurePlayers,
    /// Leave setup and play the first round.
    #[display("start round")]
    StartRound,
    /// Place the active symbol.
    #[display("submit move")]
    SubmitMove,
    /// Play again after a round ends.
    #[display("start next round")]
    StartNextRound,
    /// Return to setup.
    #[display("reset session")]
    ResetSession,
}

/// Why a move was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum MoveRejection {
    /// Another transition holds the lock.
    #[display("{} is still in flight", _0)]
    TransitionInFlight(TransitionKind),

    /// No round is being played.
    #[display("no round is being played (phase: {})", _0)]
    WrongPhase(SessionPhase),

    /// The engine refused the move.
    #[display("{}", _0)]
    #[from]
    Illegal(IllegalMove),
}

impl std::error::Error for MoveRejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveRejection::Illegal(err) => Some(err),
            _ => None,
        }
    }
}

/// Error returned by session operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum SessionError {
    /// A player name is empty.
    #[display("Invalid configuration: {}", _0)]
    #[from]
    InvalidConfiguration(ConfigurationError),

    /// A move was dropped.
    #[display("Move rejected: {}", _0)]
    #[from]
    MoveRejected(MoveRejection),

    /// A lifecycle command arrived while a transition was in flight.
    #[display("Cannot {}: {} is still in flight", command, in_flight)]
    Busy {
        /// The rejected command.
        command: Command,
        /// The transition holding the lock.
        in_flight: TransitionKind,
    },

    /// A lifecycle command is not valid in the current phase.
    #[display("Cannot {} during {}", command, phase)]
    WrongPhase {
        /// The rejected command.
        command: Command,
        /// The phase the session was in.
        phase: SessionPhase,
    },

    /// Commit called with a ticket that is not the one in flight.
    #[display("Transition #{} is not in flight", ticket)]
    StaleTransition {
        /// Ticket number of the rejected commit.
        ticket: u64,
    },

    /// A scheduled commit did not run to completion.
    #[display("Transition did not complete: {}", reason)]
    Interrupted {
        /// What went wrong.
        reason: String,
    },
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::InvalidConfiguration(err) => Some(err),
            SessionError::MoveRejected(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IllegalMove> for SessionError {
    fn from(err: IllegalMove) -> Self {
        SessionError::MoveRejected(MoveRejection::Illegal(err))
    }
}
