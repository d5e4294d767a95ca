//! Untyped result-set rows as handed over by the database collaborator.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

/// One untyped scalar cell of a result-set row.
///
/// Values arrive in whatever shape the row source produced: strings
/// (possibly null-literal sentinels such as `"n/a"`), numbers, already
/// materialized timestamps, or SQL nulls. Nothing here is validated;
/// the normalizer in `batchrep-transform` owns interpretation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// SQL NULL / JSON null.
    Null,
    /// Whole number as delivered by the driver.
    Integer(i64),
    /// Floating-point number.
    Number(f64),
    /// Timestamp already decoded by the row source.
    DateTime(NaiveDateTime),
    /// Anything textual, including sentinel spellings of "no value".
    Text(String),
}

/// A single denormalized archive row: column name to untyped value.
///
/// Rows are produced externally and never mutated by the pipeline.
/// Columns the cleaner does not ask for are simply ignored.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RawRow {
    cells: BTreeMap<String, RawValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a column by exact name.
    pub fn get(&self, column: &str) -> Option<&RawValue> {
        self.cells.get(column)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: RawValue) {
        self.cells.insert(column.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

impl FromIterator<(String, RawValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_json_object() {
        let row: RawRow = serde_json::from_str(
            r#"{"product_name": "红花", "batch_quantity": 100, "p1_out_num": 1.5, "note": null}"#,
        )
        .expect("row deserializes");
        assert_eq!(
            row.get("product_name"),
            Some(&RawValue::Text("红花".to_string()))
        );
        assert_eq!(row.get("batch_quantity"), Some(&RawValue::Integer(100)));
        assert_eq!(row.get("p1_out_num"), Some(&RawValue::Number(1.5)));
        assert_eq!(row.get("note"), Some(&RawValue::Null));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn space_separated_timestamps_stay_text() {
        // The DB hands timestamps over as "YYYY-MM-DD HH:MM:SS" strings;
        // decoding them is the normalizer's job, not serde's.
        let row: RawRow =
            serde_json::from_str(r#"{"start": "2025-07-18 10:00:00"}"#).expect("row deserializes");
        assert_eq!(
            row.get("start"),
            Some(&RawValue::Text("2025-07-18 10:00:00".to_string()))
        );
    }
}
