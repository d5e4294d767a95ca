//! Render-plan invariants.

use batchrep_model::{Scalar, Section, SectionKind, SectionRow};
use batchrep_xlsx::{BandStyle, RenderOp, RowStyle, finalize, plan};

fn sample_sections() -> Vec<Section> {
    vec![
        Section::new(
            "基本信息",
            SectionKind::Info,
            vec![
                SectionRow::new(vec![Scalar::label("品名"), Scalar::label("红花")]),
                SectionRow::new(vec![Scalar::label("设备名称"), Scalar::label("1#提取罐")]),
            ],
        ),
        Section::new(
            "一次参数设置",
            SectionKind::Parameters,
            vec![SectionRow::new(vec![
                Scalar::label("升温温度设定"),
                Scalar::Float(80.0),
            ])],
        ),
        Section::new(
            "其他信息",
            SectionKind::Summary,
            vec![SectionRow::new(vec![
                Scalar::label("操作人"),
                Scalar::label(""),
            ])],
        ),
    ]
}

#[test]
fn cursor_is_monotone_and_dense() {
    let render_plan = plan("提取车间自控报表", &sample_sections(), 6);
    let rows: Vec<u32> = render_plan.ops.iter().map(RenderOp::row).collect();
    let expected: Vec<u32> = (0..rows.len() as u32).collect();
    assert_eq!(rows, expected);
    assert_eq!(render_plan.row_count(), 6);
}

#[test]
fn bands_only_for_title_and_table_sections() {
    let render_plan = plan("提取车间自控报表", &sample_sections(), 6);
    let bands: Vec<(&u32, &BandStyle, &str)> = render_plan
        .ops
        .iter()
        .filter_map(|op| match op {
            RenderOp::MergedBand { row, text, style } => Some((row, style, text.as_str())),
            RenderOp::CellRun { .. } => None,
        })
        .collect();
    assert_eq!(
        bands,
        vec![
            (&0, &BandStyle::Title, "提取车间自控报表"),
            (&3, &BandStyle::SectionHeader, "一次参数设置"),
        ]
    );
}

#[test]
fn info_rows_are_header_styled_and_table_rows_data_styled() {
    let render_plan = plan("t", &sample_sections(), 6);
    let styles: Vec<RowStyle> = render_plan
        .ops
        .iter()
        .filter_map(|op| match op {
            RenderOp::CellRun { style, .. } => Some(*style),
            RenderOp::MergedBand { .. } => None,
        })
        .collect();
    assert_eq!(
        styles,
        vec![RowStyle::Header, RowStyle::Header, RowStyle::Data, RowStyle::Header]
    );
}

#[test]
fn planning_is_deterministic() {
    let sections = sample_sections();
    assert_eq!(plan("t", &sections, 6), plan("t", &sections, 6));
}

#[test]
fn overwide_rows_are_clipped() {
    let wide = vec![Section::new(
        "s",
        SectionKind::Info,
        vec![SectionRow::new(vec![Scalar::Int(1); 9])],
    )];
    let render_plan = plan("t", &wide, 6);
    let RenderOp::CellRun { cells, .. } = &render_plan.ops[1] else {
        panic!("expected cell run");
    };
    assert_eq!(cells.len(), 6);
}

#[test]
fn empty_sections_yield_title_only_plan() {
    let render_plan = plan("提取车间自控报表", &[], 6);
    assert_eq!(render_plan.ops.len(), 1);
    assert_eq!(render_plan.row_count(), 1);
    // A title-only plan still serializes.
    let buffer = finalize(&render_plan).expect("serializes");
    assert!(!buffer.is_empty());
}

#[test]
fn zero_row_sections_contribute_only_their_band() {
    let sections = vec![Section::new("一次煎煮记录", SectionKind::Records, vec![])];
    let render_plan = plan("t", &sections, 6);
    assert_eq!(render_plan.ops.len(), 2);
    assert!(matches!(
        render_plan.ops[1],
        RenderOp::MergedBand {
            style: BandStyle::SectionHeader,
            ..
        }
    ));
}

#[test]
fn finalize_produces_xlsx_magic() {
    let buffer = finalize(&plan("提取车间自控报表", &sample_sections(), 6)).expect("serializes");
    // xlsx is a zip container.
    assert_eq!(&buffer[..2], b"PK");
}
