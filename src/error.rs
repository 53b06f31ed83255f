//! Error type shared by the scale engine, the fretboard builder and the
//! name-based entry points.

use thiserror::Error;

/// Everything that can go wrong while resolving user input or exporting a view.
#[derive(Debug, Error)]
pub enum FretError {
    /// Note spelling not found in the 12-name canonical table.
    #[error("unknown note name '{0}'")]
    UnknownNote(String),

    /// Mode name not found in the catalog.
    #[error("unknown mode '{0}'")]
    UnknownMode(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FretError>;
