//! Ordered layout sections of a rendered report.

use crate::Scalar;

/// What a section holds; decides how the renderer frames it.
///
/// `Info` and `Summary` rows are written directly with header styling;
/// `Parameters` and `Records` get a merged title band above their rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Info,
    Parameters,
    Records,
    Summary,
}

impl SectionKind {
    /// True when the renderer writes a merged title band for the section.
    pub fn has_title_band(self) -> bool {
        matches!(self, SectionKind::Parameters | SectionKind::Records)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SectionKind::Info => "info",
            SectionKind::Parameters => "parameters",
            SectionKind::Records => "records",
            SectionKind::Summary => "summary",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of cells, ordered left to right starting at column 1.
///
/// Columns beyond the populated prefix are implicitly empty; a row never
/// holds more cells than the report type's fixed column count.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct SectionRow {
    pub cells: Vec<Scalar>,
}

impl SectionRow {
    pub fn new(cells: Vec<Scalar>) -> Self {
        Self { cells }
    }
}

impl FromIterator<Scalar> for SectionRow {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// One titled block of the report, in render order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Section {
    pub title: String,
    pub kind: SectionKind,
    pub rows: Vec<SectionRow>,
}

impl Section {
    pub fn new(title: impl Into<String>, kind: SectionKind, rows: Vec<SectionRow>) -> Self {
        Self {
            title: title.into(),
            kind,
            rows,
        }
    }
}
