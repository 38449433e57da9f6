//! Session configuration.
//!
//! Injected when the session is built; the library never reads files or
//! environment variables itself.

use std::time::Duration;

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::error::ConfigurationError;
use super::gate::TransitionKind;
use crate::engine::Symbol;

/// Minimum duration of each visual transition, in milliseconds.
///
/// State changes become observable only after the delay for their
/// transition kind has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
#[serde(default)]
pub struct TransitionTimings {
    /// Setup to the first round.
    start_round_ms: u64,
    /// Round over to the next round.
    next_round_ms: u64,
    /// A single move.
    move_ms: u64,
    /// Any phase back to setup.
    reset_ms: u64,
}

impl TransitionTimings {
    /// Latencies matched to the presentation layer's animations.
    pub const fn animated() -> Self {
        Self {
            start_round_ms: 800,
            next_round_ms: 500,
            move_ms: 300,
            reset_ms: 800,
        }
    }

    /// Zero-length delays for hosts without an animation layer.
    ///
    /// Transitions are still single-flight.
    pub const fn instant() -> Self {
        Self {
            start_round_ms: 0,
            next_round_ms: 0,
            move_ms: 0,
            reset_ms: 0,
        }
    }

    /// Delay before `kind` is committed.
    pub fn delay(&self, kind: TransitionKind) -> Duration {
        let ms = match kind {
            TransitionKind::StartRound => self.start_round_ms,
            TransitionKind::SubmitMove(_) => self.move_ms,
            TransitionKind::StartNextRound => self.next_round_ms,
            TransitionKind::ResetSession => self.reset_ms,
        };
        Duration::from_millis(ms)
    }
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self::animated()
    }
}

/// Initial configuration of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters, new)]
#[serde(default)]
pub struct SessionConfig {
    /// Transition delays.
    timings: TransitionTimings,
    /// Symbol player one holds after construction and after every reset.
    player_one_symbol: Symbol,
}

impl SessionConfig {
    /// Default symbols with zero-length transitions.
    pub fn instant() -> Self {
        Self::new(TransitionTimings::instant(), Symbol::X)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    ///
    /// ```
    /// use tictactoe_duel::SessionConfig;
    ///
    /// let config = SessionConfig::from_toml_str("[timings]\nmove_ms = 150\n").unwrap();
    /// assert_eq!(*config.timings().move_ms(), 150);
    /// assert_eq!(*config.timings().start_round_ms(), 800);
    /// ```
    #[instrument(skip(text))]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigurationError> {
        let config: Self = toml::from_str(text).map_err(|e| {
            ConfigurationError::new(format!("Failed to parse session config: {}", e))
        })?;
        debug!(?config, "Session config parsed");
        Ok(config)
    }
}
