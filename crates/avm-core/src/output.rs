//! Resolved output table.
//!
//! The output file accumulates across runs: a header is written when the
//! file is first created, each run appends its rows, and a final compaction
//! pass drops repeated lines. Compaction writes a sibling temp file and
//! renames it over the original, so a crash never leaves a truncated table.

use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use avm_model::ResolvedRecord;

use crate::error::OutputError;

pub const OUTPUT_DELIMITER: u8 = b'%';

/// Header line fields, in column order.
pub const OUTPUT_HEADER: [&str; 4] = ["release", "avm number", "avm word", "category"];

/// Line counts before and after compaction (header included).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompactionStats {
    pub lines_before: usize,
    pub lines_after: usize,
}

impl CompactionStats {
    pub fn removed(&self) -> usize {
        self.lines_before - self.lines_after
    }
}

/// Append one row per record, writing the header first if the file is new.
///
/// Returns the number of rows written.
pub fn append_output_rows(path: &Path, records: &[ResolvedRecord]) -> Result<usize, OutputError> {
    let is_new = !path.exists();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| io_error("open", path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(OUTPUT_DELIMITER)
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(file);
    let csv_error = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };

    if is_new {
        writer.write_record(OUTPUT_HEADER).map_err(csv_error)?;
        debug!(path = %path.display(), "created output table");
    }
    for record in records {
        writer
            .write_record([
                record.release_id.as_str(),
                record.number.as_str(),
                record.word.as_str(),
                record.category_text.as_str(),
            ])
            .map_err(csv_error)?;
    }
    writer.flush().map_err(|e| io_error("write", path, e))?;
    Ok(records.len())
}

/// Keep the first occurrence of each line, preserving order.
pub fn compact_lines<'a, I>(lines: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    lines.into_iter().filter(|line| seen.insert(*line)).collect()
}

/// Compact the file at `path` in place.
pub fn compact_file(path: &Path) -> Result<CompactionStats, OutputError> {
    let contents = fs::read_to_string(path).map_err(|e| io_error("read", path, e))?;
    let lines: Vec<&str> = contents.lines().collect();
    let kept = compact_lines(lines.iter().copied());
    let stats = CompactionStats {
        lines_before: lines.len(),
        lines_after: kept.len(),
    };

    replace_with_lines(path, &kept)?;

    info!(
        path = %path.display(),
        lines_before = stats.lines_before,
        lines_after = stats.lines_after,
        "output compacted"
    );
    Ok(stats)
}

/// Write `lines` to a sibling temp file and rename it over `path`.
///
/// On failure the temp file is removed and `path` is left as it was.
fn replace_with_lines(path: &Path, lines: &[&str]) -> Result<(), OutputError> {
    let temp_path = temp_path_for(path);
    let result = write_lines(&temp_path, lines).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| OutputError::AtomicReplace {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        })
    });
    if result.is_err()
        && let Err(error) = fs::remove_file(&temp_path)
        && error.kind() != io::ErrorKind::NotFound
    {
        warn!(path = %temp_path.display(), %error, "failed to remove temp file");
    }
    result
}

fn write_lines(path: &Path, lines: &[&str]) -> Result<(), OutputError> {
    let mut file = File::create(path).map_err(|e| io_error("create", path, e))?;
    for line in lines {
        file.write_all(line.as_bytes())
            .and_then(|()| file.write_all(b"\n"))
            .map_err(|e| io_error("write", path, e))?;
    }
    file.sync_all().map_err(|e| io_error("sync", path, e))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn io_error(operation: &'static str, path: &Path, source: io::Error) -> OutputError {
    OutputError::Io {
        operation,
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avm_model::Letter;
    use tempfile::TempDir;

    fn record(release_id: &str, number: &str, word: &str) -> ResolvedRecord {
        ResolvedRecord {
            release_id: release_id.to_string(),
            object_name: "M51".to_string(),
            distance: "23000000".to_string(),
            letter: Letter::C,
            number: number.to_string(),
            word: word.to_string(),
            category_text: "Galaxy > Spiral".to_string(),
        }
    }

    #[test]
    fn compact_lines_keeps_first_occurrence() {
        let lines = ["a", "b", "a", "c", "b"];
        assert_eq!(compact_lines(lines), vec!["a", "b", "c"]);
    }

    #[test]
    fn append_writes_header_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("subcat_out.dat");

        append_output_rows(&path, &[record("2013-05-a", "C.5.1.1", "Galaxy.Spiral")]).unwrap();
        append_output_rows(&path, &[record("2013-05-b", "C.5.1.1", "Galaxy.Spiral")]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        insta::assert_snapshot!(contents.trim_end(), @r"
        release%avm number%avm word%category
        2013-05-a%C.5.1.1%Galaxy.Spiral%Galaxy > Spiral
        2013-05-b%C.5.1.1%Galaxy.Spiral%Galaxy > Spiral
        ");
    }

    #[test]
    fn compact_file_replaces_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("subcat_out.dat");
        let rows = [
            record("2013-05-a", "C.5.1.1", "Galaxy.Spiral"),
            record("2013-05-a", "C.5.1.1", "Galaxy.Spiral"),
            record("2013-05-b", "", ""),
        ];
        append_output_rows(&path, &rows).unwrap();

        let stats = compact_file(&path).unwrap();

        assert_eq!(stats.lines_before, 4);
        assert_eq!(stats.lines_after, 3);
        assert_eq!(stats.removed(), 1);
        assert!(!temp_path_for(&path).exists());
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "release%avm number%avm word%category\n\
             2013-05-a%C.5.1.1%Galaxy.Spiral%Galaxy > Spiral\n\
             2013-05-b%%%Galaxy > Spiral\n"
        );
    }

    #[test]
    fn failed_replace_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("subcat_out.dat");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "occupied").unwrap();

        let result = replace_with_lines(&target, &["release%avm number%avm word%category"]);

        assert!(matches!(result, Err(OutputError::AtomicReplace { .. })));
        assert!(!temp_path_for(&target).exists());
        assert!(target.join("keep").exists());
    }
}
