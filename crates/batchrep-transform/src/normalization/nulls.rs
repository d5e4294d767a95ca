//! The single classifier for "no value" spellings.
//!
//! Archive rows spell missing values in several ways depending on which
//! upstream system filled the column. Every normalizer routes through
//! this check so the treatment stays consistent.

/// Spellings treated as no-value, compared case-insensitively.
const NULL_LITERALS: [&str; 4] = ["null", "none", "n/a", "nan"];

/// True if the trimmed string is empty or a known null spelling.
pub fn is_null_literal(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || NULL_LITERALS
            .iter()
            .any(|literal| trimmed.eq_ignore_ascii_case(literal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_literals() {
        assert!(is_null_literal(""));
        assert!(is_null_literal("   "));
        assert!(is_null_literal("null"));
        assert!(is_null_literal("NULL"));
        assert!(is_null_literal("None"));
        assert!(is_null_literal("n/a"));
        assert!(is_null_literal("NaN"));
        assert!(is_null_literal("  nan  "));
    }

    #[test]
    fn real_values_pass() {
        assert!(!is_null_literal("0"));
        assert!(!is_null_literal("红花"));
        assert!(!is_null_literal("n/a/x"));
        assert!(!is_null_literal("nullable"));
    }
}
