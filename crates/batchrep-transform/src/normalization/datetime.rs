//! Timestamp normalization.
//!
//! Archive timestamps arrive either already decoded by the driver or as
//! strings in a handful of known formats. Parsing tries the formats in
//! priority order; the first match wins.

use batchrep_model::RawValue;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::normalization::nulls::is_null_literal;

/// Datetime formats, in priority order.
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
];

/// Date-only formats; parsed values get a midnight time component.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Normalize a raw cell to a timestamp.
///
/// Already-decoded timestamps pass through unchanged. Strings are tried
/// against `%Y-%m-%d %H:%M:%S`, its fractional-seconds variant, the
/// date-only form, and the slash-separated equivalents. Anything else
/// degrades to `None`.
pub fn normalize_timestamp(value: Option<&RawValue>) -> Option<NaiveDateTime> {
    match value? {
        RawValue::DateTime(t) => Some(*t),
        RawValue::Text(s) => parse_timestamp(s),
        RawValue::Null | RawValue::Integer(_) | RawValue::Number(_) => None,
    }
}

/// Parse a timestamp string against the supported formats in order.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if is_null_literal(value) {
        return None;
    }
    let trimmed = value.trim();

    // Full datetime first, then date-only within each separator family,
    // keeping the documented priority: dash datetime, fractional,
    // dash date, slash datetime, slash date.
    for fmt in [DATETIME_FORMATS[0], DATETIME_FORMATS[1]] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(parsed);
        }
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, DATE_FORMATS[0]) {
        return Some(parsed.and_time(NaiveTime::MIN));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMATS[2]) {
        return Some(parsed);
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, DATE_FORMATS[1]) {
        return Some(parsed.and_time(NaiveTime::MIN));
    }
    None
}
