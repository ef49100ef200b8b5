use std::path::{Path, PathBuf};

use avm_core::CompactionStats;
use avm_standards::paths;

/// Resolved locations of every artifact a run touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub input: PathBuf,
    pub number_table: PathBuf,
    pub word_table: PathBuf,
    pub registry: PathBuf,
    pub output: PathBuf,
}

impl RunPaths {
    /// Conventional file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            input: paths::input_path(dir),
            number_table: paths::number_table_path(dir),
            word_table: paths::word_table_path(dir),
            registry: paths::registry_path(dir),
            output: paths::output_path(dir),
        }
    }
}

/// A record left out of the run because one of its labels did not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub release_id: String,
    pub label: String,
    pub reason: String,
}

#[derive(Debug)]
pub struct RunResult {
    pub paths: RunPaths,
    pub records_read: usize,
    pub resolved: usize,
    /// Records blanked by a sentinel label.
    pub blanked: usize,
    pub skipped: Vec<SkippedRecord>,
    pub registry_created: bool,
    pub registry_appended: usize,
    pub output_rows: usize,
    /// `None` on dry runs.
    pub compaction: Option<CompactionStats>,
    pub dry_run: bool,
}
