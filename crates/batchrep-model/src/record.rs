//! Typed report records, one struct per report type.

use chrono::NaiveDateTime;

/// Identifier fields shared by every report type.
///
/// Identifiers stay `None` when the archive row does not carry them;
/// a legitimate id of 0 is therefore distinguishable from a missing one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchInfo {
    pub product_name: Option<String>,
    pub batch_quantity: Option<f64>,
    pub batch_number: Option<String>,
    pub device_batch_id: Option<i64>,
    pub device_name: Option<String>,
    pub device_id: Option<i64>,
    pub device_batch_start_time: Option<NaiveDateTime>,
    pub device_batch_end_time: Option<NaiveDateTime>,
}

/// Cleaned archive record for one extraction-tank batch run.
///
/// Field names match the archive row columns exactly; the first decoction
/// pass (`p1_`) covers settings, the heat-up and hold phases, solvent and
/// output quantities, and the overall phase window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionTankRecord {
    pub info: BatchInfo,

    // Decoction settings
    pub p1_up_temp_set: Option<f64>,
    pub p1_up_temp_press_set: Option<f64>,
    pub p1_hold_temp_set: Option<f64>,
    pub p1_hold_temp_press_set: Option<f64>,
    pub p1_hold_temp_time_set: Option<f64>,
    pub p1_solvent_num_set: Option<f64>,

    // Heat-up phase
    pub p1_up_temp_start_time: Option<NaiveDateTime>,
    pub p1_up_temp_end_time: Option<NaiveDateTime>,
    pub p1_up_temp_min_press: Option<f64>,
    pub p1_up_temp_max_press: Option<f64>,

    // Hold phase
    pub p1_hold_temp_start_time: Option<NaiveDateTime>,
    pub p1_hold_temp_end_time: Option<NaiveDateTime>,
    pub p1_hold_temp_min_press: Option<f64>,
    pub p1_hold_temp_max_press: Option<f64>,
    pub p1_hold_temp_time: Option<f64>,
    pub p1_hold_temp_min_temp: Option<f64>,
    pub p1_hold_temp_max_temp: Option<f64>,

    // Solvent in, extract out
    pub p1_solvent_num: Option<f64>,
    pub p1_out_num: Option<f64>,

    // Overall pass window
    pub p1_start_time: Option<NaiveDateTime>,
    pub p1_end_time: Option<NaiveDateTime>,
}

/// Cleaned archive record for one double-effect concentrator run.
///
/// The concentrator archive carries no layout-specific fields yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConcentratorRecord {
    pub info: BatchInfo,
}

/// A cleaned record of any supported report type.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportRecord {
    ExtractionTank(Box<ExtractionTankRecord>),
    Concentrator(ConcentratorRecord),
}

impl ReportRecord {
    pub fn info(&self) -> &BatchInfo {
        match self {
            ReportRecord::ExtractionTank(record) => &record.info,
            ReportRecord::Concentrator(record) => &record.info,
        }
    }
}
