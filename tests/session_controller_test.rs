//! Tests for the session lifecycle driven through explicit commits.

mod common;

use common::{commit, init_tracing, play, playing_session};
use tictactoe_duel::{
    GameResult, IllegalMove, MoveRejection, Position, Score, SessionConfig, SessionController,
    SessionError, SessionPhase, Symbol, TransitionKind,
};

#[test]
fn test_full_round_then_next_round() {
    init_tracing();
    let mut session = playing_session();

    let snapshot = play(&mut session, &[0, 4, 1, 3, 2]);
    assert_eq!(*snapshot.phase(), SessionPhase::RoundOver);
    assert_eq!(snapshot.score().get(Symbol::X), 1);
    assert_eq!(snapshot.score().get(Symbol::O), 0);
    assert_eq!(
        snapshot.winning_cells(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    assert!(snapshot.available_moves().is_empty());

    let pending = session.start_next_round().expect("next round accepted");
    let snapshot = commit(&mut session, pending);
    assert_eq!(*snapshot.phase(), SessionPhase::Playing);
    assert_eq!(snapshot.available_moves().len(), 9);
    assert_eq!(snapshot.score().get(Symbol::X), 1);
}

#[test]
fn test_draw_leaves_score_unchanged() {
    init_tracing();
    let mut session = playing_session();

    let snapshot = play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(*snapshot.result(), Some(GameResult::Draw));
    assert_eq!(*snapshot.phase(), SessionPhase::RoundOver);
    assert_eq!(snapshot.score().total(), 0);
    assert_eq!(*snapshot.winner(), None);
    assert_eq!(*snapshot.rounds_played(), 1);
}

#[test]
fn test_empty_name_rejected() {
    init_tracing();
    let mut session = SessionController::new(SessionConfig::instant());

    let result = session.configure_players("", "Bob", Symbol::X);
    assert!(matches!(result, Err(SessionError::InvalidConfiguration(_))));
    assert_eq!(session.phase(), SessionPhase::Setup);

    let result = session.configure_players("Alice", "   ", Symbol::X);
    assert!(matches!(result, Err(SessionError::InvalidConfiguration(_))));
    assert_eq!(session.phase(), SessionPhase::Setup);
}

#[test]
fn test_second_move_while_locked_is_dropped() {
    init_tracing();
    let mut session = playing_session();

    let first = session.submit_move(3).expect("first move accepted");
    let second = session.submit_move(3);
    assert!(matches!(
        second,
        Err(SessionError::MoveRejected(MoveRejection::TransitionInFlight(_)))
    ));

    let snapshot = commit(&mut session, first);
    let board = snapshot.board().as_ref().expect("round in play");
    assert_eq!(board.filled_count(), 1);
    assert!(!board.is_empty(Position::MiddleLeft));
}

#[test]
fn test_reset_mid_round_clears_everything() {
    init_tracing();
    let mut session = playing_session();

    // X, X, then O.
    for moves in [&[0, 4, 1, 3, 2][..], &[0, 4, 1, 3, 2], &[0, 3, 1, 4, 8, 5]] {
        play(&mut session, moves);
        let pending = session.start_next_round().expect("next round accepted");
        commit(&mut session, pending);
    }
    play(&mut session, &[4]);
    assert_eq!(session.score().get(Symbol::X), 2);
    assert_eq!(session.score().get(Symbol::O), 1);
    assert_eq!(session.phase(), SessionPhase::Playing);

    let pending = session.reset_session().expect("reset accepted");
    let snapshot = commit(&mut session, pending);

    assert_eq!(*snapshot.phase(), SessionPhase::Setup);
    assert_eq!(*snapshot.score(), Score::new());
    assert!(snapshot.players().iter().all(|p| p.name().is_empty()));
    assert_eq!(*snapshot.board(), None);
    assert_eq!(*snapshot.rounds_played(), 0);
}

#[test]
fn test_occupied_cell_rejected_without_lock() {
    init_tracing();
    let mut session = playing_session();
    play(&mut session, &[4]);

    assert_eq!(
        session.submit_move(4),
        Err(SessionError::MoveRejected(MoveRejection::Illegal(
            IllegalMove::SquareOccupied(Position::Center)
        )))
    );
    assert!(!session.is_locked());
    assert_eq!(
        session.submit_move(12).map(|_| ()),
        Err(SessionError::from(IllegalMove::OutOfRange(12)))
    );
}

#[test]
fn test_turns_alternate_from_x() {
    init_tracing();
    let mut session = playing_session();

    let mut expected = Symbol::X;
    for index in [4, 0, 8, 2] {
        assert_eq!(*session.snapshot().active_turn(), Some(expected));
        play(&mut session, &[index]);
        expected = expected.opponent();
    }
    assert_eq!(*session.snapshot().active_turn(), Some(Symbol::X));
}

#[test]
fn test_symbol_choice_survives_next_round() {
    init_tracing();
    let mut session = SessionController::new(SessionConfig::instant());
    session
        .configure_players("Alice", "Bob", Symbol::O)
        .expect("valid names");
    let pending = session.start_round().expect("start accepted");
    commit(&mut session, pending);

    // Bob holds X and wins the top row.
    let snapshot = play(&mut session, &[0, 4, 1, 3, 2]);
    assert_eq!(snapshot.winner().as_ref().map(|p| p.name().as_str()), Some("Bob"));

    let pending = session.start_next_round().expect("next round accepted");
    let snapshot = commit(&mut session, pending);
    assert_eq!(*snapshot.players()[0].symbol(), Symbol::O);
    assert_eq!(snapshot.current_player().as_ref().map(|p| p.name().as_str()), Some("Bob"));
}

#[test]
fn test_reset_restores_configured_symbol() {
    init_tracing();
    let config = SessionConfig::from_toml_str("player_one_symbol = \"O\"").expect("valid config");
    let mut session = SessionController::new(config);
    session
        .configure_players("Alice", "Bob", Symbol::X)
        .expect("valid names");

    let pending = session.reset_session().expect("reset accepted");
    assert_eq!(pending.kind(), TransitionKind::ResetSession);
    let snapshot = commit(&mut session, pending);
    assert_eq!(*snapshot.players()[0].symbol(), Symbol::O);
    assert_eq!(*snapshot.players()[1].symbol(), Symbol::X);
}

#[test]
fn test_snapshot_serializes() {
    let mut session = playing_session();
    let snapshot = play(&mut session, &[4]);
    let json = snapshot.to_json().expect("snapshot serializes");

    assert!(json.contains("\"phase\":\"Playing\""));
    assert!(json.contains("\"score\":{\"X\":0,\"O\":0}"));
    assert!(json.contains("\"transition_lock\":false"));
}
