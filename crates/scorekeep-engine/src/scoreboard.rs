//! Process-wide scoreboard context
//!
//! One `Scoreboard` is created at startup and shared by every request. The
//! open session, the History and the store sit behind a single mutex, and
//! each command holds it for its whole read-modify-persist cycle.

use std::sync::{Mutex, MutexGuard};

use scorekeep_core::errors::{ExError, ExErrorKind};
use scorekeep_core::{History, Session, SessionManager};
use scorekeep_store::{HistoryStore, Result};

/// Everything a command mutates, guarded together
pub struct ScoreboardState {
    pub sessions: SessionManager,
    pub history: History,
    pub store: Box<dyn HistoryStore>,
}

impl ScoreboardState {
    /// Persist the current History through the store
    ///
    /// # Errors
    /// Propagates the store's `Io`/`Serialization` errors unchanged.
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.history)
    }
}

/// Shared scoreboard context passed to the command handlers
pub struct Scoreboard {
    state: Mutex<ScoreboardState>,
}

impl Scoreboard {
    /// Load the persisted History and start with no open session
    ///
    /// # Errors
    /// * `Parse` - The history document is malformed; callers treat this as fatal
    /// * `Io` - The history document could not be read
    pub fn open<S>(store: S) -> Result<Self>
    where
        S: HistoryStore + 'static,
    {
        let history = store.load()?;
        Ok(Self::with_history(history, store))
    }

    /// Build a scoreboard around an already loaded History
    pub fn with_history<S>(history: History, store: S) -> Self
    where
        S: HistoryStore + 'static,
    {
        Self {
            state: Mutex::new(ScoreboardState {
                sessions: SessionManager::new(),
                history,
                store: Box::new(store),
            }),
        }
    }

    /// Lock the state for one command
    ///
    /// # Errors
    /// * `Concurrency` - A previous command panicked while holding the lock
    pub fn lock(&self, op: &str) -> Result<MutexGuard<'_, ScoreboardState>> {
        self.state.lock().map_err(|_| {
            ExError::new(ExErrorKind::Concurrency)
                .with_op(op.to_string())
                .with_message("scoreboard lock poisoned")
        })
    }

    /// Copy of the current History
    ///
    /// # Errors
    /// * `Concurrency` - The lock is poisoned
    pub fn history(&self) -> Result<History> {
        Ok(self.lock("history")?.history.clone())
    }

    /// Copy of the open session, if any
    ///
    /// # Errors
    /// * `Concurrency` - The lock is poisoned
    pub fn open_session(&self) -> Result<Option<Session>> {
        Ok(self.lock("open_session")?.sessions.current().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorekeep_store::JsonFileStore;
    use tempfile::tempdir;

    #[test]
    fn test_open_with_missing_file() {
        let dir = tempdir().unwrap();
        let board = Scoreboard::open(JsonFileStore::new(dir.path().join("h.json"))).unwrap();

        assert_eq!(board.history().unwrap(), History::new());
        assert!(board.open_session().unwrap().is_none());
    }

    #[test]
    fn test_open_with_corrupt_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("h.json");
        std::fs::write(&path, "not json").unwrap();

        let err = Scoreboard::open(JsonFileStore::new(&path)).err().unwrap();
        assert_eq!(err.kind(), ExErrorKind::Parse);
    }

    #[test]
    fn test_scoreboard_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Scoreboard>();
    }
}
