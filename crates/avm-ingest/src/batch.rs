use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, info};

use avm_model::InputRecord;

use crate::error::{IngestError, Result};

pub const INPUT_DELIMITER: u8 = b'%';

pub const INPUT_FIELD_COUNT: usize = 4;

/// Read the whole input batch from a file.
///
/// Records with a field count other than four are rejected; the whole batch
/// fails rather than silently dropping a row.
pub fn read_input_batch(path: &Path) -> Result<Vec<InputRecord>> {
    let file = File::open(path).map_err(|error| {
        if error.kind() == io::ErrorKind::NotFound {
            IngestError::MissingInput {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::Csv {
                path: path.to_path_buf(),
                source: error.into(),
            }
        }
    })?;
    let records = read_input_batch_from(file, path)?;
    info!(path = %path.display(), record_count = records.len(), "input batch read");
    Ok(records)
}

/// Read an input batch from any reader. `source` is only used in errors.
///
/// Quote characters are literal. The release id and distance are trimmed;
/// the category and object fields are kept as supplied.
pub fn read_input_batch_from<R: Read>(reader: R, source: &Path) -> Result<Vec<InputRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(INPUT_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| IngestError::Csv {
            path: source.to_path_buf(),
            source: e,
        })?;
        let line = row.position().map_or(0, csv::Position::line);
        if row.len() != INPUT_FIELD_COUNT {
            return Err(IngestError::MalformedRecord {
                path: source.to_path_buf(),
                line,
                expected: INPUT_FIELD_COUNT,
                found: row.len(),
            });
        }
        let record = InputRecord {
            release_id: row[0].trim().to_string(),
            category_text: row[1].to_string(),
            object_name: row[2].to_string(),
            distance: row[3].trim().to_string(),
        };
        debug!(line, release_id = %record.release_id, "input record");
        records.push(record);
    }
    Ok(records)
}
