//! String and identifier normalization.

use batchrep_model::RawValue;
use batchrep_model::scalar::TIMESTAMP_FORMAT;

use crate::normalization::nulls::is_null_literal;

/// Normalize a raw cell to a trimmed string.
///
/// Null spellings and absent cells yield `None`; numbers and decoded
/// timestamps take their display form.
pub fn normalize_string(value: Option<&RawValue>) -> Option<String> {
    match value? {
        RawValue::Null => None,
        RawValue::Text(s) => {
            let trimmed = s.trim();
            (!is_null_literal(trimmed)).then(|| trimmed.to_string())
        }
        RawValue::Integer(n) => Some(n.to_string()),
        RawValue::Number(n) => Some(format!("{n}")),
        RawValue::DateTime(t) => Some(t.format(TIMESTAMP_FORMAT).to_string()),
    }
}

/// Normalize a raw cell to an integer identifier.
///
/// Requires an exactly integral value: driver integers, whole floats,
/// and strings holding a whole number. Everything else yields `None`.
pub fn normalize_id(value: Option<&RawValue>) -> Option<i64> {
    match value? {
        RawValue::Integer(n) => Some(*n),
        RawValue::Number(n) => integral(*n),
        RawValue::Text(s) => {
            if is_null_literal(s) {
                return None;
            }
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
        }
        RawValue::Null | RawValue::DateTime(_) => None,
    }
}

fn integral(n: f64) -> Option<i64> {
    let exact = n.is_finite() && n.fract() == 0.0 && n.abs() <= i64::MAX as f64;
    exact.then_some(n as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_trimmed() {
        assert_eq!(
            normalize_string(Some(&RawValue::Text("  红花  ".into()))),
            Some("红花".to_string())
        );
        assert_eq!(normalize_string(Some(&RawValue::Text("null".into()))), None);
        assert_eq!(normalize_string(Some(&RawValue::Null)), None);
        assert_eq!(normalize_string(None), None);
    }

    #[test]
    fn test_numbers_take_display_form() {
        assert_eq!(
            normalize_string(Some(&RawValue::Integer(100))),
            Some("100".to_string())
        );
        assert_eq!(
            normalize_string(Some(&RawValue::Number(1.5))),
            Some("1.5".to_string())
        );
    }

    #[test]
    fn test_ids_require_exact_integers() {
        assert_eq!(normalize_id(Some(&RawValue::Integer(1))), Some(1));
        assert_eq!(normalize_id(Some(&RawValue::Number(7.0))), Some(7));
        assert_eq!(normalize_id(Some(&RawValue::Number(7.5))), None);
        assert_eq!(normalize_id(Some(&RawValue::Text("42".into()))), Some(42));
        assert_eq!(normalize_id(Some(&RawValue::Text("42.0".into()))), Some(42));
        assert_eq!(normalize_id(Some(&RawValue::Text("42.5".into()))), None);
        assert_eq!(normalize_id(Some(&RawValue::Text("id".into()))), None);
        assert_eq!(normalize_id(None), None);
    }
}
