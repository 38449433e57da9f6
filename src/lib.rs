//! Tic-tac-toe duel - a two-player game engine with a paced session layer
//!
//! Two people share one device and alternate turns placing X and O on a 3x3
//! board. The crate owns the rules and the session lifecycle; rendering and
//! input are left to the host.
//!
//! # Architecture
//!
//! - **Engine**: pure board logic. Move legality, win and draw evaluation,
//!   and rounds checked by contracts and invariants.
//! - **Session**: players, score, and the round lifecycle
//!   (setup, playing, round over), with a single-flight transition gate that
//!   paces every state change.
//!
//! # Example
//!
//! ```
//! use tictactoe_duel::{SessionConfig, SessionController, SessionPhase, Symbol};
//!
//! let mut session = SessionController::new(SessionConfig::instant());
//! session.configure_players("Alice", "Bob", Symbol::X).unwrap();
//!
//! let pending = session.start_round().unwrap();
//! let snapshot = session.commit(pending).unwrap();
//! assert_eq!(*snapshot.phase(), SessionPhase::Playing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod session;

pub use engine::rules;
pub use engine::{
    AlternatingTurnInvariant, Board, Cell, Contract, GameResult, HistoryConsistentInvariant,
    IllegalMove, Invariant, LegalMove, MonotonicBoardInvariant, Move, MoveContract, Position,
    Round, RoundFinished, RoundInProgress, RoundInvariants, SquareIsEmpty, Symbol, SymbolsTurn,
    WinningLine, apply_move, evaluate,
};
pub use session::{
    Command, ConfigurationError, MoveRejection, PendingTransition, Player, Roster, Score,
    SessionConfig, SessionController, SessionError, SessionHandle, SessionPhase,
    SessionSnapshot, TransitionGate, TransitionKind, TransitionTimings,
};
