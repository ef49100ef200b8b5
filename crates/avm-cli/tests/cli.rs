#![allow(missing_docs)]

use std::fs;

use assert_cmd::Command;
use avm_standards::{DEFAULT_NUMBER_TABLE_CSV, DEFAULT_WORD_TABLE_CSV, paths};
use predicates::prelude::*;
use tempfile::TempDir;

fn working_dir(input: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(paths::number_table_path(dir.path()), DEFAULT_NUMBER_TABLE_CSV).unwrap();
    fs::write(paths::word_table_path(dir.path()), DEFAULT_WORD_TABLE_CSV).unwrap();
    fs::write(paths::input_path(dir.path()), input).unwrap();
    dir
}

fn avm() -> Command {
    let mut cmd = Command::cargo_bin("avm").unwrap();
    cmd.env_remove("RUST_LOG").arg("--color").arg("never");
    cmd
}

#[test]
fn test_run_exits_zero_and_writes_artifacts() {
    let dir = working_dir("2013-05-a%Galaxy > Spiral%M51%23000000\n");

    avm().arg("--dir").arg(dir.path()).assert().success();

    let output = fs::read_to_string(paths::output_path(dir.path())).unwrap();
    assert!(output.contains("2013-05-a%C.5.1.1%Galaxy.Spiral%"));
    assert!(paths::registry_path(dir.path()).exists());
}

#[test]
fn test_unresolvable_label_exits_one_and_names_label() {
    let dir = working_dir(
        "2013-05-a%Galaxy > Spiral%M51%23000000\n\
         2013-08-d%Nebula > Made Up%Nowhere%12\n",
    );

    avm()
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Nebula > Made Up"));

    assert!(!paths::output_path(dir.path()).exists());
    assert!(!paths::registry_path(dir.path()).exists());
}

#[test]
fn test_skip_unresolved_exits_zero() {
    let dir = working_dir(
        "2013-05-a%Galaxy > Spiral%M51%23000000\n\
         2013-08-d%Nebula > Made Up%Nowhere%12\n",
    );

    avm()
        .arg("--dir")
        .arg(dir.path())
        .arg("--skip-unresolved")
        .assert()
        .success()
        .stdout(predicate::str::contains("2013-08-d"));

    let output = fs::read_to_string(paths::output_path(dir.path())).unwrap();
    assert!(!output.contains("2013-08-d"));
}
