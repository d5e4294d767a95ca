//! Per-type record cleaners.
//!
//! Report generation is defined over exactly one batch-device pairing:
//! only the first row of the result set is consumed. Every declared
//! field of the record is assigned (falling back to `None`), so a
//! non-empty result set always cleans atomically.

use batchrep_model::{
    BatchInfo, ConcentratorRecord, ExtractionTankRecord, RawRow, ReportRecord, ReportType,
};
use tracing::debug;

use crate::error::{CleanError, Result};
use crate::normalization::{normalize_float, normalize_id, normalize_string, normalize_timestamp};

/// Clean the first row of a result set into the record for `report_type`.
pub fn clean(report_type: ReportType, rows: &[RawRow]) -> Result<ReportRecord> {
    match report_type {
        ReportType::ExtractionTank => {
            clean_extraction_tank(rows).map(|record| ReportRecord::ExtractionTank(Box::new(record)))
        }
        ReportType::Concentrator => clean_concentrator(rows).map(ReportRecord::Concentrator),
    }
}

fn first_row(report_type: ReportType, rows: &[RawRow]) -> Result<&RawRow> {
    let row = rows
        .first()
        .ok_or(CleanError::EmptyInput { report_type })?;
    debug!(
        report_type = %report_type,
        columns = row.len(),
        "cleaning archive row"
    );
    Ok(row)
}

fn clean_batch_info(row: &RawRow) -> BatchInfo {
    BatchInfo {
        product_name: normalize_string(row.get("product_name")),
        batch_quantity: normalize_float(row.get("batch_quantity")),
        batch_number: normalize_string(row.get("batch_number")),
        device_batch_id: normalize_id(row.get("device_batch_id")),
        device_name: normalize_string(row.get("device_name")),
        device_id: normalize_id(row.get("device_id")),
        device_batch_start_time: normalize_timestamp(row.get("device_batch_start_time")),
        device_batch_end_time: normalize_timestamp(row.get("device_batch_end_time")),
    }
}

/// Clean an extraction-tank archive row.
pub fn clean_extraction_tank(rows: &[RawRow]) -> Result<ExtractionTankRecord> {
    let row = first_row(ReportType::ExtractionTank, rows)?;
    Ok(ExtractionTankRecord {
        info: clean_batch_info(row),

        // Decoction settings
        p1_up_temp_set: normalize_float(row.get("p1_up_temp_set")),
        p1_up_temp_press_set: normalize_float(row.get("p1_up_temp_press_set")),
        p1_hold_temp_set: normalize_float(row.get("p1_hold_temp_set")),
        p1_hold_temp_press_set: normalize_float(row.get("p1_hold_temp_press_set")),
        p1_hold_temp_time_set: normalize_float(row.get("p1_hold_temp_time_set")),
        p1_solvent_num_set: normalize_float(row.get("p1_solvent_num_set")),

        // Heat-up phase
        p1_up_temp_start_time: normalize_timestamp(row.get("p1_up_temp_start_time")),
        p1_up_temp_end_time: normalize_timestamp(row.get("p1_up_temp_end_time")),
        p1_up_temp_min_press: normalize_float(row.get("p1_up_temp_min_press")),
        p1_up_temp_max_press: normalize_float(row.get("p1_up_temp_max_press")),

        // Hold phase
        p1_hold_temp_start_time: normalize_timestamp(row.get("p1_hold_temp_start_time")),
        p1_hold_temp_end_time: normalize_timestamp(row.get("p1_hold_temp_end_time")),
        p1_hold_temp_min_press: normalize_float(row.get("p1_hold_temp_min_press")),
        p1_hold_temp_max_press: normalize_float(row.get("p1_hold_temp_max_press")),
        p1_hold_temp_time: normalize_float(row.get("p1_hold_temp_time")),
        p1_hold_temp_min_temp: normalize_float(row.get("p1_hold_temp_min_temp")),
        p1_hold_temp_max_temp: normalize_float(row.get("p1_hold_temp_max_temp")),

        // Solvent in, extract out
        p1_solvent_num: normalize_float(row.get("p1_solvent_num")),
        p1_out_num: normalize_float(row.get("p1_out_num")),

        // Overall pass window
        p1_start_time: normalize_timestamp(row.get("p1_start_time")),
        p1_end_time: normalize_timestamp(row.get("p1_end_time")),
    })
}

/// Clean a double-effect concentrator archive row.
pub fn clean_concentrator(rows: &[RawRow]) -> Result<ConcentratorRecord> {
    let row = first_row(ReportType::Concentrator, rows)?;
    Ok(ConcentratorRecord {
        info: clean_batch_info(row),
    })
}
