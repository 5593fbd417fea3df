//! Human-readable chat text for command replies

use scorekeep_core::ops::games_for_session;
use scorekeep_core::scoring::{
    format_points_per_game, format_win_counts, points_per_game, summarize, win_counts,
};
use scorekeep_core::{GameRecord, History, SessionEnd};

/// Shown in place of a winner when a session ends with no games
pub const NO_WINNER: &str = "nobody";

/// Shown in place of the losers for a one-player game
pub const NO_LOSERS: &str = "nobody";

pub fn session_started(start_time: &str) -> String {
    format!("Session started at {}", start_time)
}

pub fn session_ended(end: &SessionEnd) -> String {
    format!(
        "Session ended at {} after {} games. Winner is {}!",
        end.session.end_time.as_deref().unwrap_or_default(),
        end.session.game_count,
        end.winner.as_deref().unwrap_or(NO_WINNER),
    )
}

pub fn unknown_session_command() -> String {
    "Try again! `/session` only accepts 'start' and 'end'".to_string()
}

pub fn invalid_scoreboard(reason: &str) -> String {
    format!(
        "Try again! `/gameover` takes players from winner to last place, e.g. `/gameover ann bob cat` ({})",
        reason
    )
}

/// `Got it! ann beat bob and cat` followed by the stats block
pub fn game_recorded(game: &GameRecord, history: &History, session_id: &str) -> String {
    let losers = if game.losers().is_empty() {
        NO_LOSERS.to_string()
    } else {
        game.losers().join(" and ")
    };

    format!(
        "Got it! {} beat {}\n{}",
        game.winner().unwrap_or_default(),
        losers,
        stats_block(history, session_id)
    )
}

/// Session win tallies plus all-time points-per-game
pub fn stats_block(history: &History, session_id: &str) -> String {
    let wins = win_counts(games_for_session(history, session_id));
    let averages = points_per_game(&summarize(&history.games));

    format!(
        "*Session wins:* {}\n\n*All Time Points:*\n{}",
        format_win_counts(&wins),
        format_points_per_game(&averages)
    )
}

/// Offline standings report for the CLI
pub fn standings(history: &History) -> String {
    let averages = points_per_game(&summarize(&history.games));
    format!(
        "{} games over {} closed sessions\n\n*All Time Points:*\n{}",
        history.games.len(),
        history.sessions.len(),
        format_points_per_game(&averages)
    )
}
