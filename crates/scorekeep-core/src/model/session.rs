use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timestamp_now;

/// A bounded run of games grouped under one identifier
///
/// Open while `end_time` is `None`. Once closed it is moved into
/// `History::sessions` and never mutated again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier (UUID v4)
    pub session_id: String,

    /// Human-readable open time
    pub start_time: String,

    /// Human-readable close time; `None` while the session is open
    pub end_time: Option<String>,

    /// Number of games recorded while this session was open
    pub game_count: u32,
}

impl Session {
    /// Open a fresh session stamped with the current time
    pub fn open() -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            start_time: timestamp_now(),
            end_time: None,
            game_count: 0,
        }
    }

    /// Check if this session is still open
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    pub(crate) fn increment_game_count(&mut self) {
        self.game_count += 1;
    }

    /// Close the session, stamping `end_time`
    pub(crate) fn close(mut self) -> Self {
        self.end_time = Some(timestamp_now());
        self
    }
}
