use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{error, info, info_span};

use avm_core::{
    CategoryResolver, FileRegistry, MemoryRegistry, UnresolvedPolicy, read_registry_keys,
};
use avm_model::{ReferenceTables, TaxonomyWord};
use avm_standards::{
    DEFAULT_NUMBER_TABLE_CSV, DEFAULT_WORD_TABLE_CSV, load_default_tables, load_reference_tables,
    paths,
};

use crate::cli::{CategoriesArgs, InitArgs, RunArgs};
use avm_cli::pipeline::{load, resolve_batch, update_registry, write_output};
use avm_cli::types::{RunPaths, RunResult};
use crate::summary::apply_table_style;

pub fn run_batch(args: &RunArgs) -> Result<RunResult> {
    let dir = working_dir(args.dir.as_deref())?;
    let paths = run_paths(&dir, args);
    let run_span = info_span!("run", dir = %dir.display());
    let _run_guard = run_span.enter();
    let policy = if args.skip_unresolved {
        UnresolvedPolicy::Skip
    } else {
        UnresolvedPolicy::Abort
    };

    let loaded = load(&paths)?;
    let resolver = CategoryResolver::new(&loaded.tables);
    let outcome = resolve_batch(&resolver, &loaded.records, policy).inspect_err(|e| {
        error!(label = %e.label(), "no AVM category specified; add the label to the reference tables");
    })?;

    let (registry_created, registry_appended, compaction) = if args.dry_run {
        let keys = read_registry_keys(&paths.registry).context("read registry")?;
        let mut registry = MemoryRegistry::with_keys(keys);
        let appended = update_registry(&mut registry, &outcome.resolved)?;
        (false, appended, None)
    } else {
        let mut registry = FileRegistry::open(&paths.registry).context("open registry")?;
        let appended = update_registry(&mut registry, &outcome.resolved)?;
        let compaction = write_output(&paths, &outcome.resolved)?;
        info!(path = %paths.output.display(), "output written");
        (registry.was_created(), appended, Some(compaction))
    };

    Ok(RunResult {
        records_read: loaded.records.len(),
        resolved: outcome.resolved.len(),
        blanked: outcome.blanked(),
        output_rows: if args.dry_run { 0 } else { outcome.resolved.len() },
        skipped: outcome.skipped,
        registry_created,
        registry_appended,
        compaction,
        dry_run: args.dry_run,
        paths,
    })
}

pub fn run_categories(args: &CategoriesArgs) -> Result<()> {
    let dir = working_dir(args.dir.as_deref())?;
    let number_path = paths::number_table_path(&dir);
    let word_path = paths::word_table_path(&dir);
    let use_files = !args.defaults && number_path.exists() && word_path.exists();
    let tables = if use_files {
        load_reference_tables(&number_path, &word_path).context("load reference tables")?
    } else {
        load_default_tables().context("load default tables")?
    };
    print_categories(&tables);
    Ok(())
}

/// Files written by `init`, and the ones left alone because they existed.
#[derive(Debug, Default)]
pub struct InitReport {
    pub created: Vec<PathBuf>,
    pub existing: Vec<PathBuf>,
}

pub fn run_init(args: &InitArgs) -> Result<InitReport> {
    let dir = working_dir(args.dir.as_deref())?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    let mut report = InitReport::default();
    for (path, contents) in [
        (paths::number_table_path(&dir), DEFAULT_NUMBER_TABLE_CSV),
        (paths::word_table_path(&dir), DEFAULT_WORD_TABLE_CSV),
    ] {
        if path.exists() {
            report.existing.push(path);
            continue;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        report.created.push(path);
    }
    let registry_path = paths::registry_path(&dir);
    let registry = FileRegistry::open(&registry_path).context("open registry")?;
    if registry.was_created() {
        report.created.push(registry_path);
    } else {
        report.existing.push(registry_path);
    }
    Ok(report)
}

fn print_categories(tables: &ReferenceTables) {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Number", "Word"]);
    apply_table_style(&mut table);
    for (label, number) in tables.numbers.iter() {
        let word = tables
            .words
            .get(number.strip_letter())
            .map_or("-", TaxonomyWord::as_str);
        table.add_row(vec![label.as_str(), number.as_str(), word]);
    }
    println!("{table}");
}

/// Explicit paths are taken relative to `dir`; absolute ones pass through.
fn run_paths(dir: &Path, args: &RunArgs) -> RunPaths {
    let defaults = RunPaths::in_dir(dir);
    let resolve = |path: Option<&Path>, default: PathBuf| path.map_or(default, |p| dir.join(p));
    RunPaths {
        input: resolve(args.input.as_deref(), defaults.input),
        number_table: resolve(args.number_table.as_deref(), defaults.number_table),
        word_table: resolve(args.word_table.as_deref(), defaults.word_table),
        registry: resolve(args.registry.as_deref(), defaults.registry),
        output: resolve(args.output.as_deref(), defaults.output),
    }
}

fn working_dir(dir: Option<&Path>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir().context("resolve current directory"),
    }
}
