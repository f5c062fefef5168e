//! Error types for report outputs.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while writing exports, charts or the relational store.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to render chart {name}: {message}")]
    Chart { name: String, message: String },

    #[error("integer conversion overflow for field: {0}")]
    IntegerOverflow(&'static str),

    #[error("unknown query: {0}")]
    UnknownQuery(String),
}

impl ReportError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv(path: &Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
