//! Object registry: an append-only, key de-duplicated log of resolved
//! records that persists across runs.
//!
//! Entries are keyed by release identifier. Once a key is present it is
//! never rewritten; appending it again is a no-op.
//!
//! # Storage Format
//!
//! `FileRegistry` stores one `|`-delimited line per entry without a header:
//!
//! ```text
//! release id|object|distance|numbers|words|category
//! ```
//!
//! Fields are raw text: quote characters are neither written nor interpreted.

use std::collections::BTreeSet;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use avm_model::RegistryEntry;

use crate::error::RegistryError;

pub const REGISTRY_DELIMITER: u8 = b'|';

/// Key-set-plus-log abstraction over the registry store.
pub trait ObjectRegistry {
    /// True when an entry for `release_id` already exists.
    fn contains(&self, release_id: &str) -> bool;

    /// Append `entry` unless its key is already present.
    ///
    /// Returns `true` when the entry was appended.
    fn append_if_absent(&mut self, entry: &RegistryEntry) -> Result<bool, RegistryError>;

    /// Number of distinct keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory registry. Used for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    keys: BTreeSet<String>,
    appended: Vec<RegistryEntry>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the key set, e.g. from an existing registry file.
    pub fn with_keys(keys: BTreeSet<String>) -> Self {
        Self {
            keys,
            appended: Vec::new(),
        }
    }

    /// Entries appended since construction, in append order.
    pub fn appended(&self) -> &[RegistryEntry] {
        &self.appended
    }
}

impl ObjectRegistry for MemoryRegistry {
    fn contains(&self, release_id: &str) -> bool {
        self.keys.contains(release_id)
    }

    fn append_if_absent(&mut self, entry: &RegistryEntry) -> Result<bool, RegistryError> {
        if !self.keys.insert(entry.release_id.clone()) {
            return Ok(false);
        }
        self.appended.push(entry.clone());
        Ok(true)
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Registry persisted as a flat file.
#[derive(Debug)]
pub struct FileRegistry {
    path: PathBuf,
    keys: BTreeSet<String>,
    created: bool,
    needs_newline: bool,
}

impl FileRegistry {
    /// Open the registry at `path`, creating an empty file if absent.
    pub fn open(path: &Path) -> Result<Self, RegistryError> {
        let created = !path.exists();
        if created {
            File::create(path).map_err(|e| io_error("create", path, e))?;
            info!(path = %path.display(), "created registry");
        }
        let keys = read_registry_keys(path)?;
        let needs_newline = !ends_with_newline(path)?;
        debug!(path = %path.display(), entries = keys.len(), "registry opened");
        Ok(Self {
            path: path.to_path_buf(),
            keys,
            created,
            needs_newline,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when this run created the registry file.
    pub fn was_created(&self) -> bool {
        self.created
    }
}

impl ObjectRegistry for FileRegistry {
    fn contains(&self, release_id: &str) -> bool {
        self.keys.contains(release_id)
    }

    fn append_if_absent(&mut self, entry: &RegistryEntry) -> Result<bool, RegistryError> {
        if self.keys.contains(&entry.release_id) {
            return Ok(false);
        }
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| io_error("open", &self.path, e))?;
        if self.needs_newline {
            file.write_all(b"\n")
                .map_err(|e| io_error("write", &self.path, e))?;
            self.needs_newline = false;
        }
        let mut writer = csv::WriterBuilder::new()
            .delimiter(REGISTRY_DELIMITER)
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(file);
        writer.serialize(entry).map_err(|e| RegistryError::Csv {
            path: self.path.clone(),
            source: e,
        })?;
        writer.flush().map_err(|e| io_error("write", &self.path, e))?;
        debug!(release_id = %entry.release_id, "added to registry");
        self.keys.insert(entry.release_id.clone());
        Ok(true)
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Read the keys of a registry file. A missing file has no keys.
///
/// Only the first field of each line is read, so rows written by older
/// layouts with fewer columns are still honored.
pub fn read_registry_keys(path: &Path) -> Result<BTreeSet<String>, RegistryError> {
    if !path.exists() {
        return Ok(BTreeSet::new());
    }
    let mut reader = registry_reader(path)?;
    let mut keys = BTreeSet::new();
    for result in reader.records() {
        let record = result.map_err(|e| RegistryError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        if let Some(key) = record.get(0) {
            keys.insert(key.to_string());
        }
    }
    Ok(keys)
}

/// Read every entry of a registry file in append order.
pub fn read_registry_entries(path: &Path) -> Result<Vec<RegistryEntry>, RegistryError> {
    let mut reader = registry_reader(path)?;
    reader
        .deserialize()
        .map(|result| {
            result.map_err(|e| RegistryError::Csv {
                path: path.to_path_buf(),
                source: e,
            })
        })
        .collect()
}

fn registry_reader(path: &Path) -> Result<csv::Reader<File>, RegistryError> {
    let file = File::open(path).map_err(|e| io_error("open", path, e))?;
    Ok(csv::ReaderBuilder::new()
        .delimiter(REGISTRY_DELIMITER)
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(file))
}

fn ends_with_newline(path: &Path) -> Result<bool, RegistryError> {
    let mut file = File::open(path).map_err(|e| io_error("open", path, e))?;
    let len = file
        .metadata()
        .map_err(|e| io_error("inspect", path, e))?
        .len();
    if len == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))
        .map_err(|e| io_error("read", path, e))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)
        .map_err(|e| io_error("read", path, e))?;
    Ok(last[0] == b'\n')
}

fn io_error(operation: &'static str, path: &Path, source: io::Error) -> RegistryError {
    RegistryError::Io {
        operation,
        path: path.to_path_buf(),
        source,
    }
}
