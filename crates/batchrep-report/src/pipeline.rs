//! The end-to-end report pipeline: resolve, clean, build, render.

use batchrep_model::{RawRow, ReportType, Section};
use batchrep_xlsx::{RenderPlan, finalize, plan};
use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::error::Result;
use crate::registry::resolve;

/// A cleaned and laid-out report, ready to render.
#[derive(Debug, Clone)]
pub struct PreparedReport {
    pub report_type: ReportType,
    pub title: String,
    /// Batch number from the archive row, used for output naming.
    pub batch_number: Option<String>,
    pub column_num: u16,
    pub sections: Vec<Section>,
}

impl PreparedReport {
    /// The immutable render program for this report.
    pub fn plan(&self) -> RenderPlan {
        plan(&self.title, &self.sections, self.column_num)
    }

    /// Serialize the report to an in-memory xlsx buffer.
    pub fn render(&self) -> Result<Vec<u8>> {
        Ok(finalize(&self.plan())?)
    }
}

/// Resolve, clean, and lay out a report with the given generation time.
pub fn prepare_at(
    report_type: &str,
    rows: &[RawRow],
    generated_at: NaiveDateTime,
) -> Result<PreparedReport> {
    let spec = resolve(report_type)?;
    let record = (spec.clean)(rows)?;
    let sections = (spec.build)(&record, generated_at);

    // Title carries the device name when the archive row names one.
    let title = match record.info().device_name.as_deref() {
        Some(device_name) if !device_name.is_empty() => {
            format!("{}-{}", spec.title_stem, device_name)
        }
        _ => spec.title_stem.to_string(),
    };
    debug!(
        report_type = %spec.report_type,
        sections = sections.len(),
        %title,
        "report prepared"
    );

    Ok(PreparedReport {
        report_type: spec.report_type,
        title,
        batch_number: record.info().batch_number.clone(),
        column_num: spec.column_num,
        sections,
    })
}

/// Resolve, clean, and lay out a report stamped with the current time.
pub fn prepare(report_type: &str, rows: &[RawRow]) -> Result<PreparedReport> {
    prepare_at(report_type, rows, Local::now().naive_local())
}

/// Generate a rendered workbook for one report request.
///
/// This is the pipeline's single external entry point: the caller hands
/// over the report-type key and the materialized result set, and gets
/// back the serialized document or a typed error.
pub fn generate(report_type: &str, rows: &[RawRow]) -> Result<Vec<u8>> {
    let prepared = prepare(report_type, rows)?;
    let buffer = prepared.render()?;
    info!(
        report_type = %prepared.report_type,
        bytes = buffer.len(),
        "report generated"
    );
    Ok(buffer)
}
