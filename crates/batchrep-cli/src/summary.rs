//! Terminal summary of a generated report.

use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use batchrep_report::PreparedReport;

pub fn print_summary(prepared: &PreparedReport, output: &Path) {
    println!("Report: {}", prepared.title);
    if let Some(batch) = &prepared.batch_number {
        println!("Batch: {batch}");
    }
    println!("Output: {}", output.display());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Section"),
        header_cell("Kind"),
        header_cell("Rows"),
    ]);
    for section in &prepared.sections {
        table.add_row(vec![
            Cell::new(&section.title),
            Cell::new(section.kind),
            Cell::new(section.rows.len()).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
