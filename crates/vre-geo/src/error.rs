//! Error types for lookup-table loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading lookup tables.
///
/// Lookups themselves never error: a missing name, code, or scoping value
/// resolves to `None`.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Failed to read a table file.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// A row is missing a required column.
    #[error("{path}: row {row} missing column '{column}'")]
    MissingColumn {
        path: PathBuf,
        row: usize,
        column: &'static str,
    },
}

impl GeoError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Csv {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for lookup-table operations.
pub type Result<T> = std::result::Result<T, GeoError>;
