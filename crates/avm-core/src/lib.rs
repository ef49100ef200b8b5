//! AVM subject category resolution engine.
//!
//! Turns informal category labels plus a distance token into AVM subject
//! category numbers and words, and keeps the registry and output artifacts
//! de-duplicated.

pub mod classify;
pub mod error;
pub mod options;
pub mod output;
pub mod prepare;
pub mod registry;
pub mod resolver;

pub use classify::{classify, classify_distance};
pub use error::{MissingEntry, OutputError, RegistryError, ResolveError};
pub use options::UnresolvedPolicy;
pub use output::{
    CompactionStats, OUTPUT_HEADER, append_output_rows, compact_file, compact_lines,
};
pub use prepare::{normalize_category_text, prepare_labels};
pub use registry::{
    FileRegistry, MemoryRegistry, ObjectRegistry, read_registry_entries, read_registry_keys,
};
pub use resolver::{CategoryResolver, INTERACTING_NUMBERS, INTERACTING_WORDS, Resolution};
