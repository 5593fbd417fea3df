pub mod game_ops;
pub mod session_manager;

pub use game_ops::{games_for_session, record_game, validate_scoreboard, SessionGames};
pub use session_manager::{SessionEnd, SessionManager};
