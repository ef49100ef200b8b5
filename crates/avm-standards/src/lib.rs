#![deny(unsafe_code)]

pub mod defaults;
pub mod error;
pub mod loaders;
pub mod paths;

pub use crate::defaults::{
    DEFAULT_NUMBER_TABLE_CSV, DEFAULT_WORD_TABLE_CSV, load_default_number_table,
    load_default_tables, load_default_word_table,
};
pub use crate::error::{Result, StandardsError};
pub use crate::loaders::{
    load_number_table, load_reference_tables, load_word_table, read_number_table,
    read_word_table,
};
