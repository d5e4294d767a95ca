//! Canonical typed values produced by the normalizer.

use std::fmt;

use chrono::NaiveDateTime;

/// Timestamp display format used throughout the rendered report.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A normalized, type-tagged value free of source-format quirks.
///
/// `Absent` is distinct from a present-but-empty string and always
/// renders as an empty cell, never as the literal "None" or "null".
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Scalar {
    Float(f64),
    Int(i64),
    Text(String),
    Timestamp(NaiveDateTime),
    Absent,
}

impl Scalar {
    /// Fixed label cell.
    pub fn label(text: &str) -> Self {
        Scalar::Text(text.to_string())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Scalar::Absent)
    }

    /// True for values the renderer writes as spreadsheet numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Scalar::Float(_) | Scalar::Int(_))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Timestamp(t) => write!(f, "{}", t.format(TIMESTAMP_FORMAT)),
            Scalar::Absent => Ok(()),
        }
    }
}

impl From<Option<f64>> for Scalar {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Scalar::Absent, Scalar::Float)
    }
}

impl From<Option<i64>> for Scalar {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Scalar::Absent, Scalar::Int)
    }
}

impl From<Option<String>> for Scalar {
    fn from(value: Option<String>) -> Self {
        value.map_or(Scalar::Absent, Scalar::Text)
    }
}

impl From<Option<NaiveDateTime>> for Scalar {
    fn from(value: Option<NaiveDateTime>) -> Self {
        value.map_or(Scalar::Absent, Scalar::Timestamp)
    }
}
