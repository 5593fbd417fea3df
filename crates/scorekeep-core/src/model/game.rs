use serde::{Deserialize, Serialize};

use super::timestamp_now;

/// One completed game's final ranking
///
/// Immutable once created. The scoreboard runs from winner to last place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Human-readable capture time
    pub timestamp: String,

    /// Player names, first place first
    pub scoreboard: Vec<String>,

    /// Session open when the game was recorded, if any
    pub session_id: Option<String>,
}

impl GameRecord {
    /// Create a record stamped with the current time
    pub fn new(scoreboard: Vec<String>, session_id: Option<String>) -> Self {
        Self {
            timestamp: timestamp_now(),
            scoreboard,
            session_id,
        }
    }

    /// First-place player, if the scoreboard is non-empty
    pub fn winner(&self) -> Option<&str> {
        self.scoreboard.first().map(String::as_str)
    }

    /// Everyone after first place, in finishing order
    pub fn losers(&self) -> &[String] {
        self.scoreboard.get(1..).unwrap_or(&[])
    }

    /// Check whether this game was recorded in the given session
    pub fn belongs_to(&self, session_id: &str) -> bool {
        self.session_id.as_deref() == Some(session_id)
    }
}
