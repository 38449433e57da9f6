//! Session controller: the round lifecycle state machine.

use tracing::{debug, info, instrument, warn};

use super::config::SessionConfig;
use super::error::{Command, MoveRejection, SessionError};
use super::gate::{PendingTransition, TransitionGate, TransitionKind};
use super::phase::SessionPhase;
use super::players::Roster;
use super::score::Score;
use super::snapshot::SessionSnapshot;
use crate::engine::{
    Contract, IllegalMove, Move, MoveContract, Position, Round, RoundInProgress, Symbol,
};

/// Owns everything a session mutates: players, score, the current round,
/// and the transition lock.
///
/// Gated operations return a [`PendingTransition`]; nothing observable
/// changes until it is passed to [`SessionController::commit`]. Use
/// [`SessionHandle`](super::SessionHandle) to have the delay and commit
/// scheduled for you.
#[derive(Debug)]
pub struct SessionController {
    config: SessionConfig,
    roster: Roster,
    score: Score,
    round: Option<Round>,
    rounds_played: u32,
    gate: TransitionGate,
}

impl SessionController {
    /// Creates a session in setup with unnamed players.
    #[instrument]
    pub fn new(config: SessionConfig) -> Self {
        info!("Creating session");
        Self {
            roster: Roster::unnamed(*config.player_one_symbol()),
            config,
            score: Score::new(),
            round: None,
            rounds_played: 0,
            gate: TransitionGate::new(),
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        SessionPhase::of(self.round.as_ref())
    }

    /// The injected configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The two players.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Wins per symbol.
    pub fn score(&self) -> Score {
        self.score
    }

    /// The round being played or just finished.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// True while a transition is in flight.
    pub fn is_locked(&self) -> bool {
        self.gate.is_locked()
    }

    /// Sets player names and player one's symbol.
    ///
    /// Only valid during setup. Leaves the phase unchanged; starting a round
    /// is a separate command.
    #[instrument(skip(self))]
    pub fn configure_players(
        &mut self,
        name1: &str,
        name2: &str,
        symbol1: Symbol,
    ) -> Result<(), SessionError> {
        self.ensure_idle(Command::ConfigurePlayers)?;
        self.ensure_phase(Command::ConfigurePlayers, SessionPhase::Setup)?;

        self.roster = Roster::configure(name1, name2, symbol1)?;
        Ok(())
    }

    /// Accepts a request to leave setup and play the first round.
    ///
    /// Player names are validated again here.
    #[instrument(skip(self))]
    pub fn start_round(&mut self) -> Result<PendingTransition, SessionError> {
        self.ensure_idle(Command::StartRound)?;
        self.ensure_phase(Command::StartRound, SessionPhase::Setup)?;
        self.roster.validate()?;

        self.accept(TransitionKind::StartRound)
    }

    /// Accepts a move for the symbol to play at `index` (0-8).
    ///
    /// Dropped with [`SessionError::MoveRejected`] while the lock is held,
    /// outside a round in progress, or when the engine refuses the move.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: usize) -> Result<PendingTransition, SessionError> {
        if let Some(in_flight) = self.gate.in_flight() {
            warn!(%in_flight, "Move dropped: transition in flight");
            return Err(MoveRejection::TransitionInFlight(in_flight).into());
        }

        let round = match &self.round {
            Some(Round::InProgress(round)) => round,
            _ => {
                let phase = self.phase();
                warn!(%phase, "Move dropped: no round in progress");
                return Err(MoveRejection::WrongPhase(phase).into());
            }
        };

        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Move dropped: index out of range");
            SessionError::from(IllegalMove::OutOfRange(index))
        })?;
        MoveContract::pre(round, &Move::new(round.to_move(), position)).inspect_err(|e| {
            warn!(%e, "Move dropped");
        })?;

        self.accept(TransitionKind::SubmitMove(position))
    }

    /// Accepts a request to clear the board after a finished round.
    ///
    /// Score and players are kept.
    #[instrument(skip(self))]
    pub fn start_next_round(&mut self) -> Result<PendingTransition, SessionError> {
        self.ensure_idle(Command::StartNextRound)?;
        self.ensure_phase(Command::StartNextRound, SessionPhase::RoundOver)?;

        self.accept(TransitionKind::StartNextRound)
    }

    /// Accepts a request to return to setup from any phase.
    ///
    /// On commit the board, names, score, and symbol choice are all cleared.
    #[instrument(skip(self))]
    pub fn reset_session(&mut self) -> Result<PendingTransition, SessionError> {
        self.ensure_idle(Command::ResetSession)?;

        self.accept(TransitionKind::ResetSession)
    }

    /// Applies an accepted transition and releases the lock.
    ///
    /// Fails with [`SessionError::StaleTransition`] if `pending` is not the
    /// transition in flight; the lock is left untouched in that case.
    #[instrument(skip(self, pending), fields(ticket = pending.ticket(), kind = %pending.kind()))]
    pub fn commit(&mut self, pending: PendingTransition) -> Result<SessionSnapshot, SessionError> {
        if !self.gate.admits(&pending) {
            warn!("Commit with a ticket that is not in flight");
            return Err(SessionError::StaleTransition {
                ticket: pending.ticket(),
            });
        }

        let applied = self.apply(pending.kind());
        self.gate.release(pending);
        applied?;

        Ok(self.snapshot())
    }

    /// Read-only view of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::new(
            self.phase(),
            self.round.as_ref().map(|r| r.board().clone()),
            self.score,
            &self.roster,
            self.round.as_ref().and_then(Round::active_turn),
            self.round.as_ref().map(Round::result),
            self.gate.in_flight(),
            self.rounds_played,
        )
    }

    fn accept(&mut self, kind: TransitionKind) -> Result<PendingTransition, SessionError> {
        let delay = self.config.timings().delay(kind);
        let pending = self.gate.acquire(kind, delay).map_err(|in_flight| {
            SessionError::Busy {
                command: Command::from(kind),
                in_flight,
            }
        })?;
        debug!(%kind, ?delay, "Transition accepted");
        Ok(pending)
    }

    fn apply(&mut self, kind: TransitionKind) -> Result<(), SessionError> {
        match kind {
            TransitionKind::StartRound => {
                self.roster.validate()?;
                self.round = Some(Round::InProgress(RoundInProgress::new()));
                info!(
                    first = %self.roster.first(),
                    second = %self.roster.second(),
                    "Round started"
                );
            }
            TransitionKind::SubmitMove(position) => {
                let Some(Round::InProgress(round)) = &self.round else {
                    return Err(MoveRejection::WrongPhase(self.phase()).into());
                };
                let next = round.play(position)?;

                if let Round::Finished(finished) = &next {
                    let result = finished.result();
                    if let Some(symbol) = finished.winner() {
                        self.score.record_win(symbol);
                    }
                    self.rounds_played += 1;
                    info!(
                        %result,
                        x = self.score.get(Symbol::X),
                        o = self.score.get(Symbol::O),
                        "Round over"
                    );
                }
                debug!(board = %next.board(), "Board after move");
                self.round = Some(next);
            }
            TransitionKind::StartNextRound => {
                self.round = Some(Round::InProgress(RoundInProgress::new()));
                info!(round = self.rounds_played + 1, "Next round started");
            }
            TransitionKind::ResetSession => {
                self.roster = Roster::unnamed(*self.config.player_one_symbol());
                self.score = Score::new();
                self.round = None;
                self.rounds_played = 0;
                info!("Session reset to setup");
            }
        }
        Ok(())
    }

    fn ensure_idle(&self, command: Command) -> Result<(), SessionError> {
        match self.gate.in_flight() {
            Some(in_flight) => {
                warn!(%command, %in_flight, "Command dropped: transition in flight");
                Err(SessionError::Busy { command, in_flight })
            }
            None => Ok(()),
        }
    }

    fn ensure_phase(&self, command: Command, expected: SessionPhase) -> Result<(), SessionError> {
        let phase = self.phase();
        if phase == expected {
            Ok(())
        } else {
            warn!(%command, %phase, "Command not valid in this phase");
            Err(SessionError::WrongPhase { command, phase })
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl From<TransitionKind> for Command {
    fn from(kind: TransitionKind) -> Self {
        match kind {
            TransitionKind::StartRound => Command::StartRound,
            TransitionKind::SubmitMove(_) => Command::SubmitMove,
            TransitionKind::StartNextRound => Command::StartNextRound,
            TransitionKind::ResetSession => Command::ResetSession,
        }
    }
}
