//! In-memory registry of live game sessions.

use crate::error::StoreError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tictac_engine::{BoardView, GameSession, GameStatusView, GameView, Mark, MoveReport, SessionId};
use tracing::{debug, info, instrument, warn};

type SessionHandle = Arc<Mutex<GameSession>>;

#[derive(Debug, Default)]
struct Registry {
    sessions: HashMap<SessionId, SessionHandle>,
    /// Insertion order, for listing.
    order: Vec<SessionId>,
}

/// Owns every live session and serializes mutation per session.
///
/// Cloning yields another handle to the same registry. The registry map is
/// guarded by one coarse lock held only for lookup, insert and remove;
/// each session has its own lock held for the full duration of a move or
/// reset, so different sessions never wait on each other.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    registry: Arc<Mutex<Registry>>,
}

// No mutation step can panic halfway through, so a poisoned lock still
// guards consistent state.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SessionStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session store");
        Self::default()
    }

    /// Creates a session and registers it under a fresh identifier.
    #[instrument(skip(self))]
    pub fn create(&self, player1_name: Option<String>, player2_name: Option<String>) -> GameView {
        let mut registry = lock(&self.registry);

        let mut id = SessionId::generate();
        while registry.sessions.contains_key(&id) {
            warn!(session_id = %id, "Identifier collision, regenerating");
            id = SessionId::generate();
        }

        let session = GameSession::with_id(id.clone(), player1_name, player2_name);
        let view = session.view();
        registry
            .sessions
            .insert(id.clone(), Arc::new(Mutex::new(session)));
        registry.order.push(id.clone());

        info!(session_id = %id, live = registry.order.len(), "Created new session");
        view
    }

    /// Looks up a session handle, releasing the registry lock before returning.
    fn entry(&self, id: &str) -> Result<SessionHandle, StoreError> {
        lock(&self.registry)
            .sessions
            .get(id)
            .cloned()
            .ok_or_else(|| {
                debug!(session_id = id, "Session not found");
                StoreError::SessionNotFound(SessionId::from(id))
            })
    }

    /// Runs `f` with exclusive access to one session.
    fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameSession) -> T,
    ) -> Result<T, StoreError> {
        let handle = self.entry(id)?;
        let mut session = lock(&handle);
        Ok(f(&mut session))
    }

    /// Returns a snapshot of a session.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Result<GameView, StoreError> {
        self.with_session(id, |session| session.view())
    }

    /// Attempts a move in a session.
    ///
    /// Rule rejections are reported inside the [`MoveReport`]; only an
    /// unknown identifier is an error.
    #[instrument(skip(self))]
    pub fn apply_move(
        &self,
        id: &str,
        row: i64,
        col: i64,
        player: Option<Mark>,
    ) -> Result<MoveReport, StoreError> {
        self.with_session(id, |session| session.submit_move(player, row, col))
    }

    /// Applies a move on behalf of the player called `name`.
    ///
    /// An unknown name is a rule rejection like any other and comes back in
    /// the [`MoveReport`].
    #[instrument(skip(self))]
    pub fn apply_move_by_name(
        &self,
        id: &str,
        name: &str,
        row: i64,
        col: i64,
    ) -> Result<MoveReport, StoreError> {
        self.with_session(id, |session| session.submit_move_by_name(name, row, col))
    }

    /// Resets a session to a fresh board.
    #[instrument(skip(self))]
    pub fn reset(&self, id: &str) -> Result<GameView, StoreError> {
        self.with_session(id, |session| session.reset().view())
    }

    /// Removes a session.
    #[instrument(skip(self))]
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut registry = lock(&self.registry);
        if registry.sessions.remove(id).is_none() {
            debug!(session_id = id, "Session not found");
            return Err(StoreError::SessionNotFound(SessionId::from(id)));
        }
        registry.order.retain(|live| live.as_str() != id);
        info!(session_id = id, live = registry.order.len(), "Deleted session");
        Ok(())
    }

    /// Snapshots of all live sessions in creation order.
    #[instrument(skip(self))]
    pub fn list(&self) -> Vec<GameView> {
        let handles: Vec<SessionHandle> = {
            let registry = lock(&self.registry);
            registry
                .order
                .iter()
                .filter_map(|id| registry.sessions.get(id).cloned())
                .collect()
        };
        let views: Vec<GameView> = handles.iter().map(|handle| lock(handle).view()).collect();
        debug!(count = views.len(), "Listed sessions");
        views
    }

    /// Condensed status of a session.
    #[instrument(skip(self))]
    pub fn status(&self, id: &str) -> Result<GameStatusView, StoreError> {
        self.with_session(id, |session| session.status())
    }

    /// Board of a session.
    #[instrument(skip(self))]
    pub fn board(&self, id: &str) -> Result<BoardView, StoreError> {
        self.with_session(id, |session| session.board().rows())
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        lock(&self.registry).order.len()
    }

    /// True when no sessions are live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
