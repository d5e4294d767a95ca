//! Layout invariants for the extraction-tank report.

use batchrep_layout::{EXTRACTION_TANK_COLUMNS, build_extraction_tank};
use batchrep_model::{ExtractionTankRecord, Scalar, SectionKind};
use chrono::{NaiveDate, NaiveDateTime};

fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 19)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap()
}

fn sample_record() -> ExtractionTankRecord {
    let mut record = ExtractionTankRecord::default();
    record.info.product_name = Some("红花".to_string());
    record.info.batch_quantity = Some(100.0);
    record.info.batch_number = Some("TZ25071801".to_string());
    record.info.device_name = Some("1#提取罐".to_string());
    record.info.device_id = Some(1);
    record.p1_up_temp_press_set = Some(1.0);
    record.p1_hold_temp_press_set = Some(1.5);
    record.p1_solvent_num_set = Some(100.0);
    record.p1_up_temp_set = Some(80.0);
    record.p1_hold_temp_set = Some(90.0);
    record.p1_hold_temp_time_set = Some(120.0);
    record.p1_out_num = Some(850.5);
    record
}

#[test]
fn section_and_row_counts_are_fixed() {
    let sections = build_extraction_tank(&sample_record(), generated_at());
    assert_eq!(sections.len(), 4);

    let row_counts: Vec<usize> = sections.iter().map(|s| s.rows.len()).collect();
    assert_eq!(row_counts, vec![3, 2, 5, 1]);

    let kinds: Vec<SectionKind> = sections.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Info,
            SectionKind::Parameters,
            SectionKind::Records,
            SectionKind::Summary
        ]
    );
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["基本信息", "一次参数设置", "一次煎煮记录", "其他信息"]);
}

#[test]
fn no_row_exceeds_the_grid() {
    let sections = build_extraction_tank(&sample_record(), generated_at());
    for section in &sections {
        for row in &section.rows {
            assert!(row.cells.len() <= EXTRACTION_TANK_COLUMNS as usize);
        }
    }
}

#[test]
fn dangling_output_row_has_one_pair() {
    let sections = build_extraction_tank(&sample_record(), generated_at());
    let last_record_row = sections[2].rows.last().expect("records rows");
    assert_eq!(
        last_record_row.cells,
        vec![Scalar::label("出液量"), Scalar::Float(850.5)]
    );
}

#[test]
fn settings_values_keep_column_order() {
    let sections = build_extraction_tank(&sample_record(), generated_at());
    let values: Vec<String> = sections[1]
        .rows
        .iter()
        .flat_map(|row| row.cells.iter().skip(1).step_by(2))
        .map(ToString::to_string)
        .collect();
    assert_eq!(values, vec!["1", "1.5", "100", "80", "90", "120"]);
}

#[test]
fn absent_fields_render_as_empty_cells() {
    let record = ExtractionTankRecord::default();
    let sections = build_extraction_tank(&record, generated_at());
    for section in &sections[..3] {
        for row in &section.rows {
            for cell in row.cells.iter().skip(1).step_by(2) {
                assert_eq!(cell.to_string(), "");
            }
        }
    }
}

#[test]
fn summary_carries_generation_timestamp() {
    let sections = build_extraction_tank(&sample_record(), generated_at());
    let summary = &sections[3].rows[0];
    assert_eq!(summary.cells[0], Scalar::label("操作人"));
    assert_eq!(summary.cells[1], Scalar::label(""));
    assert_eq!(summary.cells[2], Scalar::label("复核人"));
    assert_eq!(summary.cells[5].to_string(), "2025-07-19 08:30:00");
}
