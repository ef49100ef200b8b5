//! Reference table loading.
//!
//! Both tables are comma-delimited flat files without a header. Only the
//! first two columns are read; lines starting with `#` are comments.
//! Category labels are kept verbatim (a trailing space is part of the
//! label), numbers and words are trimmed.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use avm_model::{
    CategoryLabel, NumberTable, ReferenceTables, TaxonomyNumber, TaxonomyWord, WordTable,
};

use crate::error::{Result, StandardsError};

/// Load the category -> number table from a file.
pub fn load_number_table(path: &Path) -> Result<NumberTable> {
    let file = open_reference(path)?;
    let table = read_number_table(file, path)?;
    debug!(path = %path.display(), entries = table.len(), "loaded number table");
    Ok(table)
}

/// Load the number -> word table from a file.
pub fn load_word_table(path: &Path) -> Result<WordTable> {
    let file = open_reference(path)?;
    let table = read_word_table(file, path)?;
    debug!(path = %path.display(), entries = table.len(), "loaded word table");
    Ok(table)
}

/// Load both tables. Fails on the first missing file or malformed row.
pub fn load_reference_tables(number_path: &Path, word_path: &Path) -> Result<ReferenceTables> {
    let numbers = load_number_table(number_path)?;
    let words = load_word_table(word_path)?;
    Ok(ReferenceTables::new(numbers, words))
}

/// Parse a number table from any reader. `source` is only used in errors.
pub fn read_number_table<R: Read>(reader: R, source: &Path) -> Result<NumberTable> {
    let pairs = read_pairs(reader, source)?;
    Ok(pairs
        .into_iter()
        .map(|(label, number)| (CategoryLabel::new(label), TaxonomyNumber::new(number)))
        .collect())
}

/// Parse a word table from any reader. `source` is only used in errors.
pub fn read_word_table<R: Read>(reader: R, source: &Path) -> Result<WordTable> {
    let pairs = read_pairs(reader, source)?;
    Ok(pairs
        .into_iter()
        .map(|(number, word)| (TaxonomyNumber::new(number.trim()), TaxonomyWord::new(word)))
        .collect())
}

fn open_reference(path: &Path) -> Result<File> {
    File::open(path).map_err(|error| {
        if error.kind() == io::ErrorKind::NotFound {
            StandardsError::MissingReferenceFile {
                path: path.to_path_buf(),
            }
        } else {
            StandardsError::CsvRead {
                path: path.to_path_buf(),
                source: error.into(),
            }
        }
    })
}

fn read_pairs<R: Read>(reader: R, source: &Path) -> Result<Vec<(String, String)>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut pairs = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| StandardsError::CsvRead {
            path: source.to_path_buf(),
            source: e,
        })?;
        let line = record.position().map_or(0, csv::Position::line);
        let key = record.get(0).unwrap_or_default();
        let value = record.get(1).unwrap_or_default().trim();

        if key.trim().is_empty() {
            return Err(malformed(source, line, "empty key"));
        }
        if value.is_empty() {
            return Err(malformed(source, line, "empty value"));
        }
        pairs.push((key.to_string(), value.to_string()));
    }
    Ok(pairs)
}

fn malformed(source: &Path, line: u64, message: &str) -> StandardsError {
    StandardsError::MalformedReferenceRow {
        path: source.to_path_buf(),
        line,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn source() -> PathBuf {
        PathBuf::from("test.dat")
    }

    #[test]
    fn test_number_table_keeps_label_whitespace() {
        let data = "Galaxy > Spiral,5.1.1\n\"Survey > Galactic Center Survey > \",5\n";
        let table = read_number_table(data.as_bytes(), &source()).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.contains("Survey > Galactic Center Survey > "));
        assert!(!table.contains("Survey > Galactic Center Survey >"));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let data = "5.1.1,Galaxy.Spiral,spiral galaxies\n";
        let table = read_word_table(data.as_bytes(), &source()).unwrap();

        assert_eq!(table.get("5.1.1").map(TaxonomyWord::as_str), Some("Galaxy.Spiral"));
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let data = "# label,number\n\nStar > Nova,3.2.1.5\n";
        let table = read_number_table(data.as_bytes(), &source()).unwrap();

        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let data = "Star > Nova,3.2.1\nStar > Nova,3.2.1.5\n";
        let table = read_number_table(data.as_bytes(), &source()).unwrap();

        assert_eq!(
            table.get("Star > Nova").map(TaxonomyNumber::as_str),
            Some("3.2.1.5")
        );
    }

    #[test]
    fn test_empty_value_is_malformed() {
        let data = "Galaxy > Spiral,5.1.1\nGalaxy > Dwarf, \n";
        let result = read_number_table(data.as_bytes(), &source());

        assert!(matches!(
            result,
            Err(StandardsError::MalformedReferenceRow { line: 2, .. })
        ));
    }

    #[test]
    fn test_missing_value_column_is_malformed() {
        let data = "Galaxy > Spiral\n";
        let result = read_number_table(data.as_bytes(), &source());

        assert!(matches!(
            result,
            Err(StandardsError::MalformedReferenceRow { line: 1, .. })
        ));
    }

    #[test]
    fn test_empty_key_is_malformed() {
        let data = ",Galaxy.Spiral\n";
        let result = read_word_table(data.as_bytes(), &source());

        assert!(matches!(
            result,
            Err(StandardsError::MalformedReferenceRow { .. })
        ));
    }
}
