#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("reference table not found: {path}")]
    MissingReferenceFile { path: PathBuf },

    #[error("malformed reference row in {path} at line {line}: {message}")]
    MalformedReferenceRow {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("failed to read reference table {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, StandardsError>;
