//! scorekeep store - persistence for the History document
//!
//! Provides:
//! - The `HistoryStore` seam used by the command handlers
//! - A JSON file store writing 2-space indented documents
//! - Atomic temp→rename writes

pub mod atomic;
pub mod errors;
pub mod json_store;

// Re-export key types
pub use errors::Result;
pub use json_store::{HistoryStore, JsonFileStore};
