//! Render-instruction planning.
//!
//! The planner walks the sections once with a monotonically increasing
//! row cursor and emits one instruction per sheet row. No cell is
//! addressed twice and merges never overlap by construction.

use batchrep_model::{Scalar, Section};

/// Styling of a merged full-width band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandStyle {
    /// Report title: large bold font, no fill.
    Title,
    /// Section title band: header font on the header fill.
    SectionHeader,
}

/// Styling of a run of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    /// Bold header font with fill; used for info and summary rows.
    Header,
    /// Regular data font.
    Data,
}

/// One sheet-row instruction. Rows are zero-based.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    /// Merge the row across the full column span and write `text`.
    MergedBand {
        row: u32,
        text: String,
        style: BandStyle,
    },
    /// Write `cells` left to right starting at column 1.
    CellRun {
        row: u32,
        cells: Vec<Scalar>,
        style: RowStyle,
    },
}

impl RenderOp {
    pub fn row(&self) -> u32 {
        match self {
            RenderOp::MergedBand { row, .. } | RenderOp::CellRun { row, .. } => *row,
        }
    }
}

/// An immutable, ordered render program for one sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub title: String,
    pub column_num: u16,
    pub ops: Vec<RenderOp>,
}

impl RenderPlan {
    /// Total number of sheet rows the plan occupies.
    pub fn row_count(&self) -> u32 {
        self.ops.last().map_or(0, |op| op.row() + 1)
    }
}

/// Plan the render of `sections` under a merged `title` band.
///
/// Section order is preserved; table sections (`Parameters`, `Records`)
/// get a merged title band above their data rows, info and summary
/// sections are written directly with header styling. Rows wider than
/// the grid are clipped to `column_num` cells. An empty section list
/// yields a title-only plan.
pub fn plan(title: &str, sections: &[Section], column_num: u16) -> RenderPlan {
    let mut ops = Vec::new();
    let mut cursor: u32 = 0;

    ops.push(RenderOp::MergedBand {
        row: cursor,
        text: title.to_string(),
        style: BandStyle::Title,
    });
    cursor += 1;

    for section in sections {
        let row_style = if section.kind.has_title_band() {
            ops.push(RenderOp::MergedBand {
                row: cursor,
                text: section.title.clone(),
                style: BandStyle::SectionHeader,
            });
            cursor += 1;
            RowStyle::Data
        } else {
            RowStyle::Header
        };
        for row in &section.rows {
            let mut cells = row.cells.clone();
            cells.truncate(column_num as usize);
            ops.push(RenderOp::CellRun {
                row: cursor,
                cells,
                style: row_style,
            });
            cursor += 1;
        }
    }

    RenderPlan {
        title: title.to_string(),
        column_num,
        ops,
    }
}
