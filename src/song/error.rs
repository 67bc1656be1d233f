//! Song loading and validation errors.

use std::path::PathBuf;

/// Errors raised while loading or validating songs and setlists.
#[derive(Debug, thiserror::Error)]
pub enum SongError {
    #[error("Line {line}: {field} must be a finite, non-negative number (got {value})")]
    InvalidTime {
        line: usize,
        field: &'static str,
        value: f64,
    },

    #[error("Line {line}: section ends at {end}s before it starts at {start}s")]
    InvertedSection { line: usize, start: f64, end: f64 },

    #[error("Line {line}: section number must be positive")]
    InvalidSectionNumber { line: usize },

    #[error("Song duration must be a finite, non-negative number (got {value})")]
    InvalidDuration { value: f64 },

    #[error("Song not found: {id}")]
    NotFound { id: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
