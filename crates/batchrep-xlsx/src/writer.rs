//! Finalization: apply a render plan to a workbook and serialize it.

use batchrep_model::{Scalar, Section};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use tracing::{debug, warn};

use crate::error::Result;
use crate::plan::{BandStyle, RenderOp, RenderPlan, RowStyle, plan};

/// Uniform column width applied to every grid column.
pub const DEFAULT_COLUMN_WIDTH: f64 = 20.0;

const FONT_NAME: &str = "宋体";
const HEADER_FILL: u32 = 0xE6E6E6;

fn bordered(format: Format) -> Format {
    format
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

fn title_format() -> Format {
    bordered(Format::new().set_font_name(FONT_NAME).set_font_size(18).set_bold())
}

fn header_format() -> Format {
    bordered(
        Format::new()
            .set_font_name(FONT_NAME)
            .set_font_size(11)
            .set_bold()
            .set_background_color(Color::RGB(HEADER_FILL)),
    )
}

fn data_format() -> Format {
    bordered(Format::new().set_font_name(FONT_NAME).set_font_size(11))
}

/// Render `sections` under `title` straight to an xlsx buffer.
pub fn render(title: &str, sections: &[Section], column_num: u16) -> Result<Vec<u8>> {
    finalize(&plan(title, sections, column_num))
}

/// Apply a render plan to a fresh workbook and serialize it in memory.
pub fn finalize(render_plan: &RenderPlan) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let title = title_format();
    let header = header_format();
    let data = data_format();
    let last_col = render_plan.column_num.saturating_sub(1);

    for op in &render_plan.ops {
        match op {
            RenderOp::MergedBand { row, text, style } => {
                let format = match style {
                    BandStyle::Title => &title,
                    BandStyle::SectionHeader => &header,
                };
                if last_col > 0 {
                    worksheet.merge_range(*row, 0, *row, last_col, text, format)?;
                } else {
                    worksheet.write_string_with_format(*row, 0, text, format)?;
                }
            }
            RenderOp::CellRun { row, cells, style } => {
                let format = match style {
                    RowStyle::Header => &header,
                    RowStyle::Data => &data,
                };
                for (col, cell) in cells.iter().enumerate() {
                    write_cell(worksheet, *row, col as u16, cell, format)?;
                }
            }
        }
    }

    for col in 0..render_plan.column_num {
        // Width application never blocks the report; a failed column
        // keeps the sheet default.
        if let Err(error) = worksheet.set_column_width(col, DEFAULT_COLUMN_WIDTH) {
            warn!(%error, col, "column width not applied");
        }
    }

    debug!(
        rows = render_plan.row_count(),
        columns = render_plan.column_num,
        "serializing workbook"
    );
    Ok(workbook.save_to_buffer()?)
}

fn write_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    cell: &Scalar,
    format: &Format,
) -> Result<()> {
    match cell {
        Scalar::Float(v) => {
            worksheet.write_number_with_format(row, col, *v, format)?;
        }
        Scalar::Int(v) => {
            worksheet.write_number_with_format(row, col, *v as f64, format)?;
        }
        // Timestamps carry their canonical display form; absent cells
        // still get the format so borders stay closed.
        Scalar::Text(_) | Scalar::Timestamp(_) | Scalar::Absent => {
            worksheet.write_string_with_format(row, col, cell.to_string(), format)?;
        }
    }
    Ok(())
}
