use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use scorekeep_core_types::RequestContext;
use scorekeep_engine::{gameover_command, session_command, CommandResponse, Scoreboard};
use serde::Deserialize;

use crate::error::ApiError;

pub type SharedScoreboard = Arc<Scoreboard>;

/// Slash-command form body; only `text` is required
#[derive(Debug, Deserialize)]
pub struct CommandForm {
    #[serde(default)]
    pub text: String,
    pub user_name: Option<String>,
}

impl CommandForm {
    fn context(&self) -> RequestContext {
        match &self.user_name {
            Some(name) => RequestContext::new().with_user_name(name.clone()),
            None => RequestContext::new(),
        }
    }
}

pub fn app(board: SharedScoreboard) -> Router {
    Router::new()
        .route("/session", post(manage_session))
        .route("/gameover", post(log_result))
        .route("/health", get(health))
        .with_state(board)
}

async fn manage_session(
    State(board): State<SharedScoreboard>,
    Form(form): Form<CommandForm>,
) -> Result<Json<CommandResponse>, ApiError> {
    let ctx = form.context();
    tracing::info!(request_id = %ctx.request_id, user = ?ctx.user_name, text = %form.text, "/session");

    // Commands block on the scoreboard lock and a file write
    let response =
        tokio::task::spawn_blocking(move || session_command(&board, &ctx, &form.text)).await??;
    Ok(Json(response))
}

async fn log_result(
    State(board): State<SharedScoreboard>,
    Form(form): Form<CommandForm>,
) -> Result<Json<CommandResponse>, ApiError> {
    let ctx = form.context();
    tracing::info!(request_id = %ctx.request_id, user = ?ctx.user_name, text = %form.text, "/gameover");

    let response =
        tokio::task::spawn_blocking(move || gameover_command(&board, &ctx, &form.text)).await??;
    Ok(Json(response))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
