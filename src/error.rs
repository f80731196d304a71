//! Error types for the export pipeline

use std::path::PathBuf;

/// Result type alias for exporter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort an export run
///
/// A playlist item referencing a track that is absent from the library is
/// deliberately NOT represented here: such items are dropped silently.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A settings, package or library file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A settings, package or library file was read but is not well-formed
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// An output directory could not be created or listed
    #[error("failed to prepare directory {path}: {source}")]
    Directory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A playlist file could not be written, or a stale file could not be deleted
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A playlist could not be encoded as JSON
    #[error("failed to encode playlist {name}: {source}")]
    Encode {
        name: String,
        source: serde_json::Error,
    },
}
