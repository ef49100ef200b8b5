//! Error types for resolution and artifact persistence.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use avm_model::CategoryLabel;

/// Which reference table lacked an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingEntry {
    /// The label is not a key of the number table.
    Number,
    /// The label's number is not a key of the word table.
    Word { number: String },
}

impl fmt::Display for MissingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "no entry in number table"),
            Self::Word { number } => write!(f, "number {number} has no entry in word table"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no AVM category specified for '{label}' ({missing})")]
    UnresolvableCategory {
        label: CategoryLabel,
        missing: MissingEntry,
    },
}

impl ResolveError {
    pub fn label(&self) -> &CategoryLabel {
        match self {
            Self::UnresolvableCategory { label, .. } => label,
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to {operation} registry {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse registry {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to {operation} output {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to replace {target_path} with {temp_path}: {source}")]
    AtomicReplace {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
