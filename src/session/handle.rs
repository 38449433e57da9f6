//! Async driver for a session.
//!
//! Accepts each gated request synchronously, waits out the transition delay
//! on the tokio runtime, then commits and publishes the new snapshot.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::{debug, instrument};

use super::config::SessionConfig;
use super::controller::SessionController;
use super::error::SessionError;
use super::gate::PendingTransition;
use super::snapshot::SessionSnapshot;
use crate::engine::Symbol;

/// Shared handle to one session.
///
/// Clones refer to the same session. Every accepted request and every commit
/// publishes a snapshot to subscribers.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    session: Arc<Mutex<SessionController>>,
    updates: Arc<watch::Sender<SessionSnapshot>>,
}

impl SessionHandle {
    /// Creates a handle around a fresh session.
    #[instrument]
    pub fn new(config: SessionConfig) -> Self {
        Self::from_controller(SessionController::new(config))
    }

    /// Wraps an existing controller.
    pub fn from_controller(controller: SessionController) -> Self {
        let (updates, _) = watch::channel(controller.snapshot());
        Self {
            session: Arc::new(Mutex::new(controller)),
            updates: Arc::new(updates),
        }
    }

    /// Receives every published snapshot, starting from the current one.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.updates.subscribe()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }

    /// Sets player names and player one's symbol. Not gated.
    #[instrument(skip(self))]
    pub fn configure_players(
        &self,
        name1: &str,
        name2: &str,
        symbol1: Symbol,
    ) -> Result<SessionSnapshot, SessionError> {
        let mut session = self.lock();
        session.configure_players(name1, name2, symbol1)?;
        let snapshot = session.snapshot();
        self.updates.send_replace(snapshot.clone());
        Ok(snapshot)
    }

    /// Starts the first round once the transition delay has elapsed.
    #[instrument(skip(self))]
    pub async fn start_round(&self) -> Result<SessionSnapshot, SessionError> {
        let pending = self.accept(SessionController::start_round)?;
        self.settle(pending).await
    }

    /// Plays the active symbol at `index` once the transition delay has elapsed.
    #[instrument(skip(self))]
    pub async fn submit_move(&self, index: usize) -> Result<SessionSnapshot, SessionError> {
        let pending = self.accept(|session| session.submit_move(index))?;
        self.settle(pending).await
    }

    /// Clears the board for another round once the transition delay has elapsed.
    #[instrument(skip(self))]
    pub async fn start_next_round(&self) -> Result<SessionSnapshot, SessionError> {
        let pending = self.accept(SessionController::start_next_round)?;
        self.settle(pending).await
    }

    /// Returns to setup once the transition delay has elapsed.
    #[instrument(skip(self))]
    pub async fn reset_session(&self) -> Result<SessionSnapshot, SessionError> {
        let pending = self.accept(SessionController::reset_session)?;
        self.settle(pending).await
    }

    fn accept<F>(&self, request: F) -> Result<PendingTransition, SessionError>
    where
        F: FnOnce(&mut SessionController) -> Result<PendingTransition, SessionError>,
    {
        let mut session = self.lock();
        let pending = request(&mut *session)?;
        self.updates.send_replace(session.snapshot());
        Ok(pending)
    }

    /// Waits `pending.delay()` and commits.
    ///
    /// The wait and commit run on their own task, so the commit happens even
    /// if the caller stops polling.
    async fn settle(&self, pending: PendingTransition) -> Result<SessionSnapshot, SessionError> {
        let session = Arc::clone(&self.session);
        let updates = Arc::clone(&self.updates);
        let ticket = pending.ticket();

        let task = tokio::spawn(async move {
            tokio::time::sleep(pending.delay()).await;
            let mut session = session.lock().unwrap_or_else(PoisonError::into_inner);
            let committed = session.commit(pending);
            updates.send_replace(session.snapshot());
            committed
        });

        debug!(ticket, "Waiting for transition to settle");
        task.await.map_err(|e| SessionError::Interrupted {
            reason: e.to_string(),
        })?
    }

    fn lock(&self) -> MutexGuard<'_, SessionController> {
        // Every mutation leaves the controller in a reached state, so a
        // poisoned lock still guards valid data.
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
