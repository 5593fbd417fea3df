// Round-trip: save followed by load reproduces the same History, in order

use scorekeep_core::ops::record_game;
use scorekeep_core::{History, SessionManager};
use scorekeep_store::{HistoryStore, JsonFileStore};
use tempfile::TempDir;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn populated_history() -> History {
    let mut manager = SessionManager::new();
    let mut history = History::new();

    record_game(&mut history, names(&["ann", "bob", "cat"]), manager.current_or_open()).unwrap();
    record_game(&mut history, names(&["bob", "ann"]), manager.current_or_open()).unwrap();
    manager.end(&mut history);
    record_game(&mut history, names(&["cat", "ann"]), manager.current_or_open()).unwrap();

    history
}

#[test]
fn test_save_then_load_is_identical() {
    // Given: a history with two sessions' worth of games
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("game_history.json"));
    let history = populated_history();

    // When: we save and reload it
    store.save(&history).unwrap();
    let reloaded = store.load().unwrap();

    // Then: games and sessions come back equal and in the same order
    assert_eq!(reloaded, history);
    assert_eq!(reloaded.games.len(), 3);
    assert_eq!(reloaded.sessions.len(), 1);
}

#[test]
fn test_second_save_is_byte_stable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("game_history.json");
    let store = JsonFileStore::new(&path);

    store.save(&populated_history()).unwrap();
    let first = std::fs::read(&path).unwrap();

    let reloaded = store.load().unwrap();
    store.save(&reloaded).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second, "reload + save should not change the file");
}

#[test]
fn test_loads_document_written_by_earlier_versions() {
    // Open sessions and null session ids both appear in older files
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("game_history.json");
    std::fs::write(
        &path,
        r#"{
  "games": [
    {
      "timestamp": "Mon Mar  5 20:14:02 2018",
      "scoreboard": ["ann", "bob"],
      "session_id": null
    }
  ],
  "sessions": [
    {
      "session_id": "4f1c4bde-0000-4000-8000-000000000000",
      "start_time": "Mon Mar  5 20:00:00 2018",
      "end_time": "Mon Mar  5 21:00:00 2018",
      "game_count": 0
    }
  ],
  "notes": "ignored"
}"#,
    )
    .unwrap();

    let history = JsonFileStore::new(&path).load().unwrap();

    assert_eq!(history.games[0].session_id, None);
    assert_eq!(history.games[0].scoreboard, names(&["ann", "bob"]));
    assert_eq!(history.sessions[0].game_count, 0);
}
