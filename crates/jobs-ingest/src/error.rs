//! Error types for job-listing ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the raw listing file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV record.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// None of the expected listing columns are present.
    #[error("no recognized job listing columns in {path} (found: {found})")]
    NoKnownColumns { path: PathBuf, found: String },
}

impl IngestError {
    pub(crate) fn from_csv(path: &std::path::Path, source: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io) = source.kind() {
            if io.kind() == std::io::ErrorKind::NotFound {
                return Self::FileNotFound {
                    path: path.to_path_buf(),
                };
            }
        }
        Self::CsvParse {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
