//! Error types for save/load.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a save record is rejected.
#[derive(Debug, Error)]
pub enum SaveDataError {
    /// Not JSON, wrong field types, or missing/unknown fields.
    #[error("invalid save record: {0}")]
    Parse(#[from] serde_json::Error),

    /// Levels start at 1.
    #[error("level must be at least 1")]
    ZeroLevel,
}

/// Errors that can occur when saving or loading progress.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// No save file at the given path.
    #[error("No saved game at '{}'", .0.display())]
    NotFound(PathBuf),

    /// The file exists but is not a valid save record.
    #[error("Corrupt save '{}': {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: SaveDataError,
    },

    /// The record could not be encoded.
    #[error("Failed to encode save for '{}': {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file could not be read or written.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
