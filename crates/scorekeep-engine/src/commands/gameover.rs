//! `/gameover` command: record one game's ranking

use scorekeep_core::errors::{ExError, ExErrorKind};
use scorekeep_core::ops::{record_game, validate_scoreboard};
use scorekeep_core::{log_op_end, log_op_error, log_op_start};
use scorekeep_core_types::RequestContext;
use scorekeep_store::Result;

use super::render;
use super::response::CommandResponse;
use crate::scoreboard::{Scoreboard, ScoreboardState};

/// Split the free-text field into player names, winner first
pub fn parse_scoreboard(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Handle a `/gameover` webhook
///
/// Records the ranking under the open session (opening one if needed),
/// saves the History and replies with the session's win tallies and the
/// all-time points-per-game table. An empty ranking is answered with a
/// corrective message and changes nothing.
///
/// ## Errors
///
/// - `Io` / `Serialization` / `Persistence`: the History could not be
///   persisted; the game stays recorded in memory and is written by the
///   next successful save
/// - `Concurrency`: the scoreboard lock is poisoned
pub fn gameover_command(
    board: &Scoreboard,
    ctx: &RequestContext,
    text: &str,
) -> Result<CommandResponse> {
    let scoreboard = parse_scoreboard(text);
    log_op_start!(
        "gameover_command",
        request_id = %ctx.request_id,
        player_count = scoreboard.len()
    );
    let start = std::time::Instant::now();

    if let Err(invalid) = validate_scoreboard(&scoreboard) {
        log_op_error!(
            "gameover_command",
            invalid.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = %ctx.request_id
        );
        return Ok(CommandResponse::in_channel(render::invalid_scoreboard(
            &invalid.to_string(),
        )));
    }

    let result = board
        .lock("gameover_command")
        .and_then(|mut state| gameover_command_impl(&mut state, scoreboard))
        .map_err(|e| {
            log_op_error!(
                "gameover_command",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %ctx.request_id
            );
            e.with_request_id(ctx.request_id.clone())
        })?;

    log_op_end!(
        "gameover_command",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id
    );

    Ok(CommandResponse::in_channel(result))
}

fn gameover_command_impl(state: &mut ScoreboardState, scoreboard: Vec<String>) -> Result<String> {
    let session = state.sessions.current_or_open();
    let session_id = session.session_id.clone();

    let index = state.history.games.len();
    record_game(&mut state.history, scoreboard, session).map_err(ExError::from)?;

    state.save().map_err(|e| e.with_session_id(session_id.clone()))?;

    let game = state.history.games.get(index).ok_or_else(|| {
        ExError::new(ExErrorKind::Internal)
            .with_op("gameover_command")
            .with_message("recorded game missing from log")
    })?;
    Ok(render::game_recorded(game, &state.history, &session_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scoreboard_splits_on_any_whitespace() {
        assert_eq!(
            parse_scoreboard("  ann\tbob\n cat "),
            vec!["ann".to_string(), "bob".to_string(), "cat".to_string()]
        );
    }

    #[test]
    fn test_parse_scoreboard_empty() {
        assert!(parse_scoreboard("   ").is_empty());
    }
}
