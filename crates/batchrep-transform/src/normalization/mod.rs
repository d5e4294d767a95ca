//! Total normalizer functions over raw result-set values.

pub mod datetime;
pub mod nulls;
pub mod numeric;
pub mod text;

pub use datetime::normalize_timestamp;
pub use nulls::is_null_literal;
pub use numeric::normalize_float;
pub use text::{normalize_id, normalize_string};
