use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use avm_cli::types::RunResult;

use crate::commands::InitReport;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.paths.input.display());
    println!("Registry: {}", result.paths.registry.display());
    if result.dry_run {
        println!("Output: {} (dry run, nothing written)", result.paths.output.display());
    } else {
        println!("Output: {}", result.paths.output.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Records read"), Cell::new(result.records_read)]);
    table.add_row(vec![Cell::new("Resolved"), Cell::new(result.resolved)]);
    table.add_row(vec![
        Cell::new("Blanked (miscellaneous/unknown)"),
        count_cell(result.blanked, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Skipped"),
        count_cell(result.skipped.len(), Color::Red),
    ]);
    let registry_label = if result.registry_created {
        "Registry entries added (new registry)"
    } else {
        "Registry entries added"
    };
    table.add_row(vec![
        Cell::new(registry_label),
        Cell::new(result.registry_appended),
    ]);
    table.add_row(vec![Cell::new("Output rows"), Cell::new(result.output_rows)]);
    match &result.compaction {
        Some(stats) => table.add_row(vec![
            Cell::new("Duplicate output lines removed"),
            Cell::new(stats.removed()),
        ]),
        None => table.add_row(vec![
            Cell::new("Duplicate output lines removed"),
            dim_cell("-"),
        ]),
    };
    println!("{table}");

    if !result.skipped.is_empty() {
        print_skipped_table(result);
    }
}

fn print_skipped_table(result: &RunResult) {
    println!();
    println!("Skipped records:");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Release"),
        header_cell("Label"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    for skipped in &result.skipped {
        table.add_row(vec![
            Cell::new(&skipped.release_id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&skipped.label),
            Cell::new(&skipped.reason).fg(Color::Red),
        ]);
    }
    println!("{table}");
}

pub fn print_init_report(report: &InitReport) {
    for path in &report.created {
        print_path("created", path);
    }
    for path in &report.existing {
        print_path("kept", path);
    }
}

fn print_path(action: &str, path: &Path) {
    println!("{action:>8} {}", path.display());
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
