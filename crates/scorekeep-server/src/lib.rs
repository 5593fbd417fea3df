//! scorekeep server - HTTP binding for the scoreboard webhooks
//!
//! - `POST /session` and `POST /gameover` accept slash-command forms
//!   (field `text`) and reply with `{ text, response_type }`
//! - `GET /health` for liveness checks
//! - Layered configuration: defaults, optional TOML file, `SCOREKEEP_*` env

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::app;
