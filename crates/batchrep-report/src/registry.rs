//! Static report-type registry.
//!
//! The registry is the single validation gate of the pipeline: once a
//! key resolves, every downstream stage trusts the type. Registered
//! once at first use, read-only afterwards.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use batchrep_layout::{EXTRACTION_TANK_COLUMNS, build_concentrator, build_extraction_tank};
use batchrep_model::{RawRow, ReportRecord, ReportType, Section};
use batchrep_transform::{CleanError, clean_concentrator, clean_extraction_tank};
use chrono::NaiveDateTime;

use crate::error::{ReportError, Result};

/// Everything the pipeline needs for one report type.
#[derive(Debug)]
pub struct ReportSpec {
    pub report_type: ReportType,
    /// Title stem; the device name is appended when known.
    pub title_stem: &'static str,
    /// Fixed column count of the layout grid.
    pub column_num: u16,
    pub clean: fn(&[RawRow]) -> std::result::Result<ReportRecord, CleanError>,
    pub build: fn(&ReportRecord, NaiveDateTime) -> Vec<Section>,
}

fn clean_tq(rows: &[RawRow]) -> std::result::Result<ReportRecord, CleanError> {
    clean_extraction_tank(rows).map(|record| ReportRecord::ExtractionTank(Box::new(record)))
}

fn build_tq(record: &ReportRecord, generated_at: NaiveDateTime) -> Vec<Section> {
    match record {
        ReportRecord::ExtractionTank(record) => build_extraction_tank(record, generated_at),
        ReportRecord::Concentrator(_) => Vec::new(),
    }
}

fn clean_sx(rows: &[RawRow]) -> std::result::Result<ReportRecord, CleanError> {
    clean_concentrator(rows).map(ReportRecord::Concentrator)
}

fn build_sx(record: &ReportRecord, generated_at: NaiveDateTime) -> Vec<Section> {
    match record {
        ReportRecord::Concentrator(record) => build_concentrator(record, generated_at),
        ReportRecord::ExtractionTank(_) => Vec::new(),
    }
}

static REGISTRY: LazyLock<BTreeMap<&'static str, ReportSpec>> = LazyLock::new(|| {
    let specs = [
        ReportSpec {
            report_type: ReportType::ExtractionTank,
            title_stem: "提取车间自控报表",
            column_num: EXTRACTION_TANK_COLUMNS,
            clean: clean_tq,
            build: build_tq,
        },
        ReportSpec {
            report_type: ReportType::Concentrator,
            title_stem: "浓缩车间自控报表",
            column_num: EXTRACTION_TANK_COLUMNS,
            clean: clean_sx,
            build: build_sx,
        },
    ];
    specs
        .into_iter()
        .map(|spec| (spec.report_type.archive_key(), spec))
        .collect()
});

/// Resolve a report-type key to its registered implementation pair.
pub fn resolve(report_type: &str) -> Result<&'static ReportSpec> {
    REGISTRY
        .get(report_type)
        .ok_or_else(|| ReportError::UnsupportedReportType(report_type.to_string()))
}

/// All registered report types, in key order.
pub fn registered_types() -> impl Iterator<Item = &'static ReportSpec> {
    REGISTRY.values()
}
