//! Shared helpers for integration tests.

#![allow(dead_code)]

use tictactoe_duel::{PendingTransition, SessionConfig, SessionController, SessionSnapshot, Symbol};

/// Installs a test subscriber once. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Commits a transition that is known to be in flight.
pub fn commit(session: &mut SessionController, pending: PendingTransition) -> SessionSnapshot {
    session.commit(pending).expect("commit in-flight transition")
}

/// Session with Alice on X and Bob on O, first round in progress.
pub fn playing_session() -> SessionController {
    let mut session = SessionController::new(SessionConfig::instant());
    session
        .configure_players("Alice", "Bob", Symbol::X)
        .expect("valid names");
    let pending = session.start_round().expect("start accepted");
    commit(&mut session, pending);
    session
}

/// Plays each index in turn, committing after every move.
pub fn play(session: &mut SessionController, indices: &[usize]) -> SessionSnapshot {
    let mut last = session.snapshot();
    for index in indices {
        let pending = session.submit_move(*index).expect("move accepted");
        last = commit(session, pending);
    }
    last
}
