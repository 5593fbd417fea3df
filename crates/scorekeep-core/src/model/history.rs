use serde::{Deserialize, Serialize};

use super::{GameRecord, Session};

/// The persisted document: every game ever recorded plus closed sessions
///
/// The single source of truth for results. The open session lives in
/// `SessionManager` until it is closed and appended here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    /// Game records in insertion order
    #[serde(default)]
    pub games: Vec<GameRecord>,

    /// Closed sessions in close order
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl History {
    /// Create an empty History
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the `games` and `sessions` of a loaded document into this one
    ///
    /// Keys present in `loaded` replace the current ones wholesale.
    pub fn merge(&mut self, loaded: History) {
        self.games = loaded.games;
        self.sessions = loaded.sessions;
    }

    /// Look up a closed session by id
    pub fn closed_session(&self, session_id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.session_id == session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default_to_empty() {
        let history: History = serde_json::from_str("{}").unwrap();
        assert!(history.games.is_empty());
        assert!(history.sessions.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let history: History =
            serde_json::from_str(r#"{"games": [], "sessions": [], "players": ["x"]}"#).unwrap();
        assert_eq!(history, History::new());
    }

    #[test]
    fn test_merge_replaces_collections() {
        let mut history = History::new();
        let loaded = History {
            games: vec![GameRecord::new(vec!["a".into()], None)],
            sessions: vec![],
        };
        history.merge(loaded.clone());
        assert_eq!(history, loaded);
    }
}
