use crate::errors::{Result, ScoreError};
use crate::model::{GameRecord, History, Session};

/// Append a game result to the log
///
/// Stamps the record with the current time and the given session's id, and
/// bumps that session's `game_count`. The log is append-only: records are
/// never mutated or removed afterwards.
///
/// # Arguments
/// * `history` - History owning the game log
/// * `scoreboard` - Player names from winner to last place
/// * `session` - The open session the game belongs to
///
/// # Errors
/// * `EmptyScoreboard` - If no players were given
/// * `BlankPlayerName` - If any name is empty or whitespace-only
pub fn record_game<'h>(
    history: &'h mut History,
    scoreboard: Vec<String>,
    session: &mut Session,
) -> Result<&'h GameRecord> {
    validate_scoreboard(&scoreboard)?;

    let record = GameRecord::new(scoreboard, Some(session.session_id.clone()));
    session.increment_game_count();

    tracing::debug!(
        session_id = %session.session_id,
        game_count = session.game_count,
        player_count = record.scoreboard.len(),
        "recorded game"
    );

    history.games.push(record);
    history
        .games
        .last()
        .ok_or_else(|| ScoreError::Internal {
            message: "game log empty after append".to_string(),
        })
}

/// Check a scoreboard without touching any state
///
/// # Errors
/// * `EmptyScoreboard` - If no players were given
/// * `BlankPlayerName` - If any name is empty or whitespace-only
pub fn validate_scoreboard(scoreboard: &[String]) -> Result<()> {
    if scoreboard.is_empty() {
        return Err(ScoreError::EmptyScoreboard);
    }
    if let Some(position) = scoreboard.iter().position(|name| name.trim().is_empty()) {
        return Err(ScoreError::BlankPlayerName {
            position: position + 1,
        });
    }
    Ok(())
}

/// Games recorded under one session, in insertion order
///
/// The iterator borrows the log and is `Clone`, so callers can walk the same
/// selection more than once.
pub fn games_for_session<'a>(history: &'a History, session_id: &'a str) -> SessionGames<'a> {
    SessionGames {
        games: history.games.iter(),
        session_id,
    }
}

/// Lazy filter over the game log for a single session
#[derive(Debug, Clone)]
pub struct SessionGames<'a> {
    games: std::slice::Iter<'a, GameRecord>,
    session_id: &'a str,
}

impl<'a> Iterator for SessionGames<'a> {
    type Item = &'a GameRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let session_id = self.session_id;
        self.games.by_ref().find(|game| game.belongs_to(session_id))
    }
}
