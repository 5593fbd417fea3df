//! Error handling for scorekeep-store
//!
//! Wraps scorekeep-core ExError with store-specific helpers

use scorekeep_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a parse error for a malformed history file
pub fn parse_error(path: &Path, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Parse)
        .with_op("load_history")
        .with_message(format!("{}: {}", path.display(), err))
}

/// Create a serialization error
pub fn serialization_error(err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("save_history")
        .with_message(err.to_string())
}

/// Create a persistence error: the new document was written but could not
/// replace the current history file
pub fn persistence_error(path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("replace_history")
        .with_message(format!("{}: {}", path.display(), err))
}
