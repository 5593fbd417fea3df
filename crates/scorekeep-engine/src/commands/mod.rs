//! Command handlers with boundary logging.
//!
//! ## Logging Ownership
//!
//! The engine owns lifecycle logging for each command:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure or rejected input
//!
//! Core and store use only `tracing::debug!()` for internal details.

pub mod gameover;
pub mod render;
pub mod response;
pub mod session;

pub use gameover::gameover_command;
pub use response::CommandResponse;
pub use session::{session_command, SessionCommand};
