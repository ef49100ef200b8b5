#![allow(missing_docs)]

use std::fs;

use avm_model::{TaxonomyNumber, TaxonomyWord};
use avm_standards::paths::{number_table_path, word_table_path};
use avm_standards::{
    StandardsError, load_default_tables, load_number_table, load_reference_tables,
};
use tempfile::TempDir;

#[test]
fn test_default_tables_load() {
    let tables = load_default_tables().unwrap();

    assert_eq!(
        tables.numbers.get("Galaxy > Spiral").map(TaxonomyNumber::as_str),
        Some("5.1.1")
    );
    assert_eq!(
        tables.words.get("3.1.8").map(TaxonomyWord::as_str),
        Some("Star.Blue Supergiant")
    );
    // Sentinels and the interacting pair are handled by the resolver.
    assert!(!tables.numbers.contains("unknown"));
    assert!(!tables.numbers.contains("Galaxy > Interacting"));
}

#[test]
fn test_default_tables_are_consistent() {
    let tables = load_default_tables().unwrap();

    assert!(tables.numbers_without_words().is_empty());
}

#[test]
fn test_load_from_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(number_table_path(dir.path()), "Star > Supernova,3.1.8\n").unwrap();
    fs::write(word_table_path(dir.path()), "3.1.8,Star.Blue Supergiant\n").unwrap();

    let tables =
        load_reference_tables(&number_table_path(dir.path()), &word_table_path(dir.path()))
            .unwrap();

    assert_eq!(tables.numbers.len(), 1);
    assert_eq!(tables.words.len(), 1);
}

#[test]
fn test_missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = number_table_path(dir.path());

    let result = load_number_table(&path);

    match result {
        Err(StandardsError::MissingReferenceFile { path: missing }) => assert_eq!(missing, path),
        other => panic!("expected missing file error, got {other:?}"),
    }
}

#[test]
fn test_malformed_row_names_file_and_line() {
    let dir = TempDir::new().unwrap();
    let path = number_table_path(dir.path());
    fs::write(&path, "Galaxy > Spiral,5.1.1\nGalaxy > Dwarf,\n").unwrap();

    let error = load_number_table(&path).unwrap_err();

    let message = error.to_string();
    assert!(message.contains("hs2avm_number.dat"), "{message}");
    assert!(message.contains("line 2"), "{message}");
}
