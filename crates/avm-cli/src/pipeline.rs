//! Batch processing pipeline with explicit stages.
//!
//! 1. **Load**: reference tables, then the whole input batch
//! 2. **Resolve**: every record, in input order
//! 3. **Registry**: append unseen release ids
//! 4. **Output**: append rows, then compact the output file
//!
//! Nothing is written until every record has been resolved, so an aborted
//! run leaves the registry and output untouched.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use avm_core::{
    CategoryResolver, CompactionStats, ObjectRegistry, ResolveError, UnresolvedPolicy,
    append_output_rows, compact_file,
};
use avm_ingest::read_input_batch;
use avm_model::{InputRecord, ReferenceTables, RegistryEntry, ResolvedRecord};
use avm_standards::load_reference_tables;

use crate::types::{RunPaths, SkippedRecord};

// ============================================================================
// Stage 1: Load
// ============================================================================

/// Reference tables and input records for one run.
#[derive(Debug)]
pub struct LoadResult {
    pub tables: ReferenceTables,
    pub records: Vec<InputRecord>,
}

/// Load both reference tables and the full input batch.
pub fn load(paths: &RunPaths) -> Result<LoadResult> {
    let start = Instant::now();
    let tables = load_reference_tables(&paths.number_table, &paths.word_table)
        .context("load reference tables")?;
    let missing = tables.numbers_without_words();
    if !missing.is_empty() {
        warn!(
            numbers = ?missing.iter().map(|n| n.as_str()).collect::<Vec<_>>(),
            "number table references numbers missing from word table"
        );
    }
    let records = read_input_batch(&paths.input).context("read input batch")?;
    info!(
        categories = tables.numbers.len(),
        words = tables.words.len(),
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    Ok(LoadResult { tables, records })
}

// ============================================================================
// Stage 2: Resolve
// ============================================================================

/// Resolved records plus the ones left out under [`UnresolvedPolicy::Skip`].
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub resolved: Vec<ResolvedRecord>,
    pub skipped: Vec<SkippedRecord>,
}

impl BatchOutcome {
    pub fn blanked(&self) -> usize {
        self.resolved.iter().filter(|r| r.is_blank()).count()
    }
}

/// Resolve every record in input order.
///
/// # Errors
///
/// Under [`UnresolvedPolicy::Abort`], returns the first
/// [`ResolveError`]; nothing resolved so far is returned.
pub fn resolve_batch(
    resolver: &CategoryResolver<'_>,
    records: &[InputRecord],
    policy: UnresolvedPolicy,
) -> std::result::Result<BatchOutcome, ResolveError> {
    let start = Instant::now();
    let mut outcome = BatchOutcome::default();
    for record in records {
        let span = info_span!("resolve", release_id = %record.release_id);
        let _guard = span.enter();
        match resolver.resolve_record(record) {
            Ok(resolved) => outcome.resolved.push(resolved),
            Err(error) if !policy.is_abort() => {
                warn!(label = %error.label(), "skipping record: {error}");
                outcome.skipped.push(SkippedRecord {
                    release_id: record.release_id.clone(),
                    label: error.label().to_string(),
                    reason: error.to_string(),
                });
            }
            Err(error) => return Err(error),
        }
    }
    info!(
        resolved = outcome.resolved.len(),
        blanked = outcome.blanked(),
        skipped = outcome.skipped.len(),
        duration_ms = start.elapsed().as_millis(),
        "resolution complete"
    );
    Ok(outcome)
}

// ============================================================================
// Stage 3: Registry
// ============================================================================

/// Append every record whose release id the registry has not seen.
///
/// Returns the number of entries appended.
pub fn update_registry<R: ObjectRegistry>(
    registry: &mut R,
    records: &[ResolvedRecord],
) -> Result<usize> {
    let mut appended = 0;
    for record in records {
        let entry = RegistryEntry::from_resolved(record);
        if registry
            .append_if_absent(&entry)
            .with_context(|| format!("update registry for {}", record.release_id))?
        {
            appended += 1;
        } else {
            debug!(release_id = %record.release_id, "already in registry");
        }
    }
    info!(appended, total = registry.len(), "registry updated");
    Ok(appended)
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Append the resolved rows and compact the output file.
pub fn write_output(paths: &RunPaths, records: &[ResolvedRecord]) -> Result<CompactionStats> {
    append_output_rows(&paths.output, records)
        .with_context(|| format!("write {}", paths.output.display()))?;
    compact_file(&paths.output).with_context(|| format!("compact {}", paths.output.display()))
}
