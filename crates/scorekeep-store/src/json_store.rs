use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use scorekeep_core::History;

use crate::atomic::atomic_write;
use crate::errors::{io_error, parse_error, serialization_error, Result};

/// Where the History document is loaded from and saved to
pub trait HistoryStore: Send {
    /// Load the persisted document, or an empty History if none exists yet
    ///
    /// # Errors
    /// * `Parse` - The document exists but is malformed
    /// * `Io` - The document exists but could not be read
    fn load(&self) -> Result<History>;

    /// Replace the persisted document with `history`
    ///
    /// # Errors
    /// * `Serialization` / `Io` - The document could not be written
    fn save(&self, history: &History) -> Result<()>;
}

/// History stored as one pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> Result<History> {
        let mut history = History::new();

        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no history file, starting empty");
                return Ok(history);
            }
            Err(e) => return Err(io_error("read_history", e)),
        };

        let loaded: History =
            serde_json::from_slice(&bytes).map_err(|e| parse_error(&self.path, e))?;
        history.merge(loaded);

        tracing::debug!(
            path = %self.path.display(),
            games = history.games.len(),
            sessions = history.sessions.len(),
            "loaded history"
        );
        Ok(history)
    }

    fn save(&self, history: &History) -> Result<()> {
        let data = serde_json::to_vec_pretty(history).map_err(serialization_error)?;
        atomic_write(&self.path, &data)?;

        tracing::debug!(
            path = %self.path.display(),
            games = history.games.len(),
            sessions = history.sessions.len(),
            "saved history"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorekeep_core::errors::ExErrorKind;
    use scorekeep_core::GameRecord;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("game_history.json"));

        assert_eq!(store.load().unwrap(), History::new());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game_history.json");
        fs::write(&path, "{\"games\": [").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Parse);
        assert_eq!(err.code(), "ERR_PARSE");
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game_history.json");
        fs::write(&path, r#"{"games": [{"scoreboard": "a b"}]}"#).unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Parse);
    }

    #[test]
    fn test_save_uses_two_space_indent() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("game_history.json"));
        let history = History {
            games: vec![GameRecord::new(vec!["a".into()], None)],
            sessions: vec![],
        };

        store.save(&history).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("{\n  \"games\": [\n    {"));
        assert!(text.contains("\n  \"sessions\": []"));
    }

    #[test]
    fn test_directory_as_target_is_io_error() {
        let dir = tempdir().unwrap();
        let err = JsonFileStore::new(dir.path()).load().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
    }
}
