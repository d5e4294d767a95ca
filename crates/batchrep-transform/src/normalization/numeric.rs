//! Numeric normalization.
//!
//! Process values arrive as driver numbers or as strings with optional
//! thousands separators. Anything unparseable degrades to `None`.

use batchrep_model::RawValue;

use crate::normalization::nulls::is_null_literal;

/// Normalize a raw cell to a float.
///
/// Handles:
/// - Driver numbers: `Number`, `Integer`
/// - Strings: trimmed, thousands separators removed ("1,234.5")
/// - Null spellings and absent cells: `None`
///
/// Returns `None` for anything that cannot be read as a number;
/// never fails.
pub fn normalize_float(value: Option<&RawValue>) -> Option<f64> {
    match value? {
        RawValue::Null | RawValue::DateTime(_) => None,
        RawValue::Integer(n) => Some(*n as f64),
        RawValue::Number(n) => n.is_finite().then_some(*n),
        RawValue::Text(s) => parse_float(s),
    }
}

/// Parse a string to a float, stripping thousands separators.
pub fn parse_float(value: &str) -> Option<f64> {
    if is_null_literal(value) {
        return None;
    }
    let cleaned = value.trim().replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Some(parsed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_numbers() {
        assert_eq!(parse_float("123"), Some(123.0));
        assert_eq!(parse_float("-45.67"), Some(-45.67));
        assert_eq!(parse_float("  80  "), Some(80.0));
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(parse_float("1,234,567"), Some(1234567.0));
        assert_eq!(parse_float("1,234.56"), Some(1234.56));
    }

    #[test]
    fn test_null_literals() {
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("null"), None);
        assert_eq!(parse_float("N/A"), None);
        assert_eq!(parse_float("NaN"), None);
    }

    #[test]
    fn test_invalid() {
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("12.34.56"), None);
    }

    #[test]
    fn test_raw_values() {
        assert_eq!(normalize_float(Some(&RawValue::Number(1.5))), Some(1.5));
        assert_eq!(normalize_float(Some(&RawValue::Integer(100))), Some(100.0));
        assert_eq!(normalize_float(Some(&RawValue::Null)), None);
        assert_eq!(normalize_float(None), None);
        assert_eq!(normalize_float(Some(&RawValue::Number(f64::NAN))), None);
    }
}
