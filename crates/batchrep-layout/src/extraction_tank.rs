//! Extraction-tank report layout.
//!
//! Four sections on a six-column grid: the batch/device info block, the
//! first-pass decoction settings, the first-pass decoction records (the
//! final row holds only the dangling 出液量 pair), and the summary row
//! with signature blanks plus the generation timestamp.

use batchrep_model::{ExtractionTankRecord, Scalar, Section, SectionKind, SectionRow};
use chrono::NaiveDateTime;

/// Fixed column count of the extraction-tank grid.
pub const EXTRACTION_TANK_COLUMNS: u16 = 6;

/// Build the ordered sections for one extraction-tank batch run.
///
/// `generated_at` is stamped into the summary row; the pipeline passes
/// the server's current time.
pub fn build_extraction_tank(
    record: &ExtractionTankRecord,
    generated_at: NaiveDateTime,
) -> Vec<Section> {
    vec![
        info_section(record),
        settings_section(record),
        records_section(record),
        summary_section(generated_at),
    ]
}

fn pairs(cells: &[(&str, Scalar)]) -> SectionRow {
    cells
        .iter()
        .flat_map(|(label, value)| [Scalar::label(label), value.clone()])
        .collect()
}

fn info_section(record: &ExtractionTankRecord) -> Section {
    let info = &record.info;
    Section::new(
        "基本信息",
        SectionKind::Info,
        vec![
            pairs(&[
                ("品名", info.product_name.clone().into()),
                ("批量", info.batch_quantity.into()),
                ("批号", info.batch_number.clone().into()),
            ]),
            pairs(&[
                ("设备名称", info.device_name.clone().into()),
                ("设备编号", info.device_id.into()),
            ]),
            pairs(&[
                ("开始时间", info.device_batch_start_time.into()),
                ("结束时间", info.device_batch_end_time.into()),
            ]),
        ],
    )
}

fn settings_section(record: &ExtractionTankRecord) -> Section {
    Section::new(
        "一次参数设置",
        SectionKind::Parameters,
        vec![
            pairs(&[
                ("升温压力设定", record.p1_up_temp_press_set.into()),
                ("保温压力设定", record.p1_hold_temp_press_set.into()),
                ("加溶媒量", record.p1_solvent_num_set.into()),
            ]),
            pairs(&[
                ("升温温度设定", record.p1_up_temp_set.into()),
                ("保温温度设定", record.p1_hold_temp_set.into()),
                ("保温时间设定", record.p1_hold_temp_time_set.into()),
            ]),
        ],
    )
}

fn records_section(record: &ExtractionTankRecord) -> Section {
    Section::new(
        "一次煎煮记录",
        SectionKind::Records,
        vec![
            pairs(&[
                ("升温开始时间", record.p1_up_temp_start_time.into()),
                ("升温结束时间", record.p1_up_temp_end_time.into()),
                ("加溶媒量", record.p1_solvent_num.into()),
            ]),
            pairs(&[
                ("保温开始时间", record.p1_hold_temp_start_time.into()),
                ("保温结束时间", record.p1_hold_temp_end_time.into()),
                ("保温时间", record.p1_hold_temp_time.into()),
            ]),
            pairs(&[
                ("升温最低压力", record.p1_up_temp_min_press.into()),
                ("保温最低压力", record.p1_hold_temp_min_press.into()),
                ("保温最低温度", record.p1_hold_temp_min_temp.into()),
            ]),
            pairs(&[
                ("升温最高压力", record.p1_up_temp_max_press.into()),
                ("保温最高压力", record.p1_hold_temp_max_press.into()),
                ("保温最高温度", record.p1_hold_temp_max_temp.into()),
            ]),
            // Odd field count: the output quantity dangles on its own row.
            pairs(&[("出液量", record.p1_out_num.into())]),
        ],
    )
}

fn summary_section(generated_at: NaiveDateTime) -> Section {
    Section::new(
        "其他信息",
        SectionKind::Summary,
        vec![pairs(&[
            // Signature blanks are filled in by hand on the printed sheet.
            ("操作人", Scalar::label("")),
            ("复核人", Scalar::label("")),
            ("报表生成时间", Scalar::Timestamp(generated_at)),
        ])],
    )
}
