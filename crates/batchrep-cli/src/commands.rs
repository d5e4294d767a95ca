//! Subcommand implementations.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use batchrep_model::RawRow;
use batchrep_report::{prepare, registered_types};
use tracing::info;

use crate::cli::GenerateArgs;
use crate::summary::print_summary;

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let content = fs::read_to_string(&args.rows_file)
        .with_context(|| format!("cannot read rows file {}", args.rows_file.display()))?;
    let rows: Vec<RawRow> = serde_json::from_str(&content)
        .with_context(|| format!("invalid result set in {}", args.rows_file.display()))?;

    let prepared = prepare(&args.report_type, &rows)?;
    let buffer = prepared.render()?;

    let output = args.output.clone().unwrap_or_else(|| {
        let batch = prepared.batch_number.as_deref().unwrap_or("unknown");
        PathBuf::from(format!("batch_report_{batch}.xlsx"))
    });
    fs::write(&output, &buffer)
        .with_context(|| format!("cannot write workbook {}", output.display()))?;
    info!(path = %output.display(), bytes = buffer.len(), "workbook written");

    print_summary(&prepared, &output);
    Ok(())
}

pub fn run_types() {
    for spec in registered_types() {
        println!(
            "{}  {} ({} columns)",
            spec.report_type.archive_key(),
            spec.report_type.label(),
            spec.column_num
        );
    }
}
