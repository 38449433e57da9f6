//! Session lifecycle phase.

use serde::{Deserialize, Serialize};

use crate::engine::Round;

/// Where the session is in its lifecycle.
///
/// ```text
/// Setup ──start_round──▶ Playing ──winning/drawing move──▶ RoundOver
///   ▲                      │  ▲                              │
///   └────reset_session─────┘  └───────start_next_round───────┘
///   ▲                                                        │
///   └──────────────────────reset_session─────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum SessionPhase {
    /// Collecting player names and symbols; no board exists.
    #[default]
    #[display("setup")]
    Setup,
    /// A round is being played.
    #[display("playing")]
    Playing,
    /// The round reached Won or Draw; the board is frozen.
    #[display("round over")]
    RoundOver,
}

impl SessionPhase {
    /// Derives the phase from the round the session holds.
    pub fn of(round: Option<&Round>) -> Self {
        match round {
            None => SessionPhase::Setup,
            Some(Round::InProgress(_)) => SessionPhase::Playing,
            Some(Round::Finished(_)) => SessionPhase::RoundOver,
        }
    }
}
