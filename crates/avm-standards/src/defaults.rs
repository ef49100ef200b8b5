//! Embedded default reference tables.
//!
//! These are the HubbleSite subject category dictionaries the tables were
//! originally maintained as. `avm init` writes them into a working
//! directory; `avm categories --defaults` lists them.

use std::path::Path;

use avm_model::{NumberTable, ReferenceTables, WordTable};

use crate::error::Result;
use crate::loaders::{read_number_table, read_word_table};

/// Default category -> number table, in the on-disk format.
pub const DEFAULT_NUMBER_TABLE_CSV: &str = include_str!("../data/hs2avm_number.csv");

/// Default number -> word table, in the on-disk format.
pub const DEFAULT_WORD_TABLE_CSV: &str = include_str!("../data/avm_number2avm_word.csv");

pub fn load_default_number_table() -> Result<NumberTable> {
    read_number_table(
        DEFAULT_NUMBER_TABLE_CSV.as_bytes(),
        Path::new("<embedded>/hs2avm_number.csv"),
    )
}

pub fn load_default_word_table() -> Result<WordTable> {
    read_word_table(
        DEFAULT_WORD_TABLE_CSV.as_bytes(),
        Path::new("<embedded>/avm_number2avm_word.csv"),
    )
}

pub fn load_default_tables() -> Result<ReferenceTables> {
    Ok(ReferenceTables::new(
        load_default_number_table()?,
        load_default_word_table()?,
    ))
}
