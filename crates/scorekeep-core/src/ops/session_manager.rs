use crate::errors::ScoreError;
use crate::model::{History, Session};
use crate::ops::games_for_session;
use crate::scoring;

/// Tracks the single open session
///
/// Two states: no session, or exactly one open `Session`. Closed sessions
/// are handed over to `History::sessions` and forgotten here.
///
/// Not thread-safe on its own; the engine guards it together with the
/// History behind one lock.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    open: Option<Session>,
}

/// Outcome of closing a session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEnd {
    /// The closed session, as appended to `History::sessions`
    pub session: Session,

    /// Session winner; `None` when no games were played
    pub winner: Option<String>,
}

impl SessionManager {
    /// Create a manager with no open session
    pub fn new() -> Self {
        Self { open: None }
    }

    /// The open session, if any
    pub fn current(&self) -> Option<&Session> {
        self.open.as_ref()
    }

    /// The open session, opening a fresh one when none exists
    ///
    /// Game results always land in a session; the first result after a
    /// close starts a new one implicitly.
    pub fn current_or_open(&mut self) -> &mut Session {
        self.open.get_or_insert_with(|| {
            let session = Session::open();
            tracing::debug!(session_id = %session.session_id, "opened session");
            session
        })
    }

    /// Start a session
    ///
    /// Idempotent: when a session is already open it is returned unchanged,
    /// keeping its id, start time and game count.
    pub fn start(&mut self) -> &Session {
        self.current_or_open()
    }

    /// Close the open session and append it to the history
    ///
    /// With no open session a fresh, empty one is opened and closed on the
    /// spot. The winner is picked over the session's games by win count;
    /// an empty session has no winner rather than an error.
    pub fn end(&mut self, history: &mut History) -> SessionEnd {
        let session = self.open.take().unwrap_or_else(Session::open).close();
        history.sessions.push(session.clone());

        let winner = match scoring::winner(games_for_session(history, &session.session_id)) {
            Ok(name) => Some(name),
            Err(ScoreError::EmptyLeaderboard) => {
                tracing::debug!(session_id = %session.session_id, "session closed without games");
                None
            }
            Err(err) => {
                tracing::debug!(session_id = %session.session_id, error = %err, "no winner");
                None
            }
        };

        SessionEnd { session, winner }
    }
}
