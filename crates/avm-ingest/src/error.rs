//! Error types for input ingestion.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("input batch not found: {path}")]
    MissingInput { path: PathBuf },

    #[error("failed to read input batch {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed input record in {path} at line {line}: expected {expected} fields, found {found}")]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
