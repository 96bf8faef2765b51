//! Summary tables printed after each command.

use std::fmt::Write;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use boq_audit::AuditLabel;
use boq_ingest::TagMapping;
use boq_model::SkipReason;

use crate::types::{AuditOutcome, ParseOutcome};

pub fn print_parse_summary(outcome: &ParseOutcome) {
    print!("{}", render_parse_summary(outcome));
}

/// Counts per outcome, followed by the skipped rows when there are any.
pub fn render_parse_summary(outcome: &ParseOutcome) -> String {
    let diagnostics = &outcome.document.diagnostics;
    let mut out = String::new();
    let _ = writeln!(out, "Document: {}", outcome.input.display());
    if let Some(path) = &outcome.output {
        let _ = writeln!(out, "Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Parsed").fg(Color::Green),
        Cell::new(diagnostics.parsed_count),
    ]);
    let counts = diagnostics.reason_counts();
    for reason in SkipReason::ALL {
        let count = counts.get(&reason).copied().unwrap_or(0);
        table.add_row(vec![
            Cell::new(format!("  {}", reason.as_str())),
            count_cell(count, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(diagnostics.total_rows()).add_attribute(Attribute::Bold),
    ]);
    let _ = writeln!(out, "{table}");

    if !diagnostics.is_clean() {
        let _ = writeln!(out, "{}", skipped_table(outcome));
    }
    out
}

fn skipped_table(outcome: &ParseOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Reason"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in &outcome.document.diagnostics.skipped {
        table.add_row(vec![
            Cell::new(row.row_index),
            Cell::new(row.reason.as_str()).fg(Color::Yellow),
            Cell::new(row.reason.message()),
        ]);
    }
    table
}

pub fn print_audit_summary(outcome: &AuditOutcome) {
    print!("{}", render_audit_summary(outcome));
}

/// Positions per label with a total row.
pub fn render_audit_summary(outcome: &AuditOutcome) -> String {
    let stats = &outcome.batch.stats;
    let mut out = String::new();
    let _ = writeln!(out, "Positions: {}", outcome.input.display());
    if let Some(path) = &outcome.output {
        let _ = writeln!(out, "Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Label"), header_cell("Positions")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for label in AuditLabel::ALL {
        table.add_row(vec![
            label_cell(label),
            count_cell(stats.count(label), label_color(label)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.total()).add_attribute(Attribute::Bold),
    ]);
    let _ = writeln!(out, "{table}");
    out
}

pub fn print_tags(mapping: &TagMapping) {
    println!("{}", render_tags(mapping));
}

pub fn render_tags(mapping: &TagMapping) -> String {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Tag")]);
    apply_table_style(&mut table);
    for (field, tag) in mapping.entries() {
        table.add_row(vec![Cell::new(field), Cell::new(tag)]);
    }
    table.to_string()
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn label_cell(label: AuditLabel) -> Cell {
    Cell::new(label.as_str())
        .fg(label_color(label))
        .add_attribute(Attribute::Bold)
}

fn label_color(label: AuditLabel) -> Color {
    match label {
        AuditLabel::Green => Color::Green,
        AuditLabel::Amber => Color::Yellow,
        AuditLabel::Red => Color::Red,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
