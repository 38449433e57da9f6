//! Session controller: players, score, round lifecycle, and the
//! single-flight transition gate.

mod config;
mod controller;
mod error;
mod gate;
mod handle;
mod phase;
mod players;
mod score;
mod snapshot;

pub use config::{SessionConfig, TransitionTimings};
pub use controller::SessionController;
pub use error::{Command, ConfigurationError, MoveRejection, SessionError};
pub use gate::{PendingTransition, TransitionGate, TransitionKind};
pub use handle::SessionHandle;
pub use phase::SessionPhase;
pub use players::{Player, Roster};
pub use score::Score;
pub use snapshot::SessionSnapshot;
