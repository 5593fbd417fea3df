//! `/session` command: start or end the open session

use scorekeep_core::{log_op_end, log_op_error, log_op_start};
use scorekeep_core_types::RequestContext;
use scorekeep_store::Result;

use super::render;
use super::response::CommandResponse;
use crate::scoreboard::{Scoreboard, ScoreboardState};

/// Parsed `/session` text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Start,
    End,
    /// Anything else; answered with a corrective message
    Unknown(String),
}

impl SessionCommand {
    /// Parse the free-text field, case-insensitive and trimmed
    pub fn parse(text: &str) -> Self {
        let normalized = text.trim().to_lowercase();
        match normalized.as_str() {
            "start" => SessionCommand::Start,
            "end" => SessionCommand::End,
            _ => SessionCommand::Unknown(normalized),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            SessionCommand::Start => "start",
            SessionCommand::End => "end",
            SessionCommand::Unknown(_) => "unknown",
        }
    }
}

/// Handle a `/session` webhook
///
/// `start` opens a session (or reports the one already running), `end`
/// closes it and names the winner, anything else gets a corrective reply.
/// The History is saved after every branch.
///
/// ## Errors
///
/// - `Io` / `Serialization` / `Persistence`: the History could not be persisted
/// - `Concurrency`: the scoreboard lock is poisoned
pub fn session_command(
    board: &Scoreboard,
    ctx: &RequestContext,
    text: &str,
) -> Result<CommandResponse> {
    let command = SessionCommand::parse(text);
    log_op_start!(
        "session_command",
        request_id = %ctx.request_id,
        command = command.name()
    );
    let start = std::time::Instant::now();

    let result = board
        .lock("session_command")
        .and_then(|mut state| session_command_impl(&mut state, &command))
        .map_err(|e| {
            log_op_error!(
                "session_command",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %ctx.request_id
            );
            e.with_request_id(ctx.request_id.clone())
        })?;

    log_op_end!(
        "session_command",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id,
        command = command.name()
    );

    Ok(CommandResponse::in_channel(result))
}

fn session_command_impl(state: &mut ScoreboardState, command: &SessionCommand) -> Result<String> {
    let text = match command {
        SessionCommand::Start => render::session_started(&state.sessions.start().start_time),
        SessionCommand::End => {
            let end = state.sessions.end(&mut state.history);
            tracing::info!(
                session_id = %end.session.session_id,
                game_count = end.session.game_count,
                winner = end.winner.as_deref().unwrap_or(render::NO_WINNER),
                "session closed"
            );
            render::session_ended(&end)
        }
        SessionCommand::Unknown(other) => {
            tracing::debug!(text = %other, "unrecognised session command");
            render::unknown_session_command()
        }
    };

    state.save()?;
    Ok(text)
}
