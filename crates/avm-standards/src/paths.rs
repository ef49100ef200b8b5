//! Conventional artifact names inside a working directory.
//!
//! A run expects the input batch and both reference tables to sit next to
//! each other; the registry and output files are created there on demand.

use std::path::{Path, PathBuf};

/// Input batch: `release%category%object%distance`, one record per line.
pub const INPUT_FILE: &str = "subcat_in.dat";

/// Category label -> AVM number table.
pub const NUMBER_TABLE_FILE: &str = "hs2avm_number.dat";

/// AVM number -> AVM word table.
pub const WORD_TABLE_FILE: &str = "avm_number2avm_word.dat";

/// Append-only object registry.
pub const REGISTRY_FILE: &str = "obj_dict.dat";

/// Resolved output table.
pub const OUTPUT_FILE: &str = "subcat_out.dat";

pub fn input_path(dir: &Path) -> PathBuf {
    dir.join(INPUT_FILE)
}

pub fn number_table_path(dir: &Path) -> PathBuf {
    dir.join(NUMBER_TABLE_FILE)
}

pub fn word_table_path(dir: &Path) -> PathBuf {
    dir.join(WORD_TABLE_FILE)
}

pub fn registry_path(dir: &Path) -> PathBuf {
    dir.join(REGISTRY_FILE)
}

pub fn output_path(dir: &Path) -> PathBuf {
    dir.join(OUTPUT_FILE)
}
