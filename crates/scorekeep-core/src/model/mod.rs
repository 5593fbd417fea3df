//! Domain models for the scoreboard
//!
//! - `GameRecord` - one finished game's ranking
//! - `Session` - a bounded run of games
//! - `History` - the persisted document owning all games and closed sessions

pub mod game;
pub mod history;
pub mod session;

pub use game::GameRecord;
pub use history::History;
pub use session::Session;

/// Format the current local time the way the history file has always
/// recorded it, e.g. `Thu Oct 15 10:03:07 2026`.
pub fn timestamp_now() -> String {
    chrono::Local::now().format("%a %b %e %H:%M:%S %Y").to_string()
}
