//! scorekeep core - in-memory scoreboard kernel
//!
//! This crate provides the data model and the pure operations behind the
//! scoreboard webhooks:
//! - GameRecord, Session and the persisted History document
//! - Session lifecycle (start, end, implicit open)
//! - The append-only game log
//! - Win tallies, the session winner and all-time points-per-game
//! - The error and logging facilities shared by the other crates

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod scoring;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, ScoreError};
pub use model::{GameRecord, History, Session};
pub use ops::{SessionEnd, SessionManager};
pub use scoring::{PlayerStats, WinCounts};
