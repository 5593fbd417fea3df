use scorekeep_core_types::RequestId;
use thiserror::Error;

/// Result type alias using ScoreError
pub type Result<T> = std::result::Result<T, ScoreError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in logs, tests and the HTTP
/// error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,

    // Scoring
    /// A winner was requested over a set of games with no first places
    EmptyLeaderboard,

    // Persistence
    /// The persisted history document could not be parsed
    Parse,
    Io,
    Serialization,
    Persistence,

    // Runtime
    Concurrency,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::EmptyLeaderboard => "ERR_EMPTY_LEADERBOARD",
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus enough context
/// (operation, session, request) to make a log line useful on its own.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    session_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            session_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add session ID context
    pub fn with_session_id(mut self, id: impl Into<String>) -> Self {
        self.session_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the session ID context, if any
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(session_id) = &self.session_id {
            write!(f, " (session_id: {})", session_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for scoreboard operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// A game result was submitted with no players
    #[error("Scoreboard is empty: list players from winner to last place")]
    EmptyScoreboard,

    /// A player name in the scoreboard is blank
    #[error("Scoreboard position {position} has a blank player name")]
    BlankPlayerName { position: usize },

    /// Winner requested over games with no recorded first places
    #[error("No games to pick a winner from")]
    EmptyLeaderboard,

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<ScoreError> for ExError {
    fn from(err: ScoreError) -> Self {
        match err {
            ScoreError::EmptyScoreboard => ExError::new(ExErrorKind::InvalidInput)
                .with_op("record_game")
                .with_message(err.to_string()),

            ScoreError::BlankPlayerName { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("record_game")
                .with_message(err.to_string()),

            ScoreError::EmptyLeaderboard => ExError::new(ExErrorKind::EmptyLeaderboard)
                .with_op("winner")
                .with_message(err.to_string()),

            ScoreError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}
