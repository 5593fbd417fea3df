//! scorekeep engine - command orchestration
//!
//! Turns the two chat commands into calls on the core session manager,
//! game log and scoring engine, persisting through a `HistoryStore`.

pub mod commands;
pub mod scoreboard;

pub use commands::{gameover_command, session_command, CommandResponse, SessionCommand};
pub use scoreboard::Scoreboard;
