#![deny(unsafe_code)]

//! Cleaning of raw archive rows into canonical report records.
//!
//! The normalizer functions are total: malformed input degrades to
//! `None` (rendered as an empty cell) rather than failing the report.
//! The only error path is an empty result set.

pub mod clean;
pub mod error;
pub mod normalization;

pub use clean::{clean, clean_concentrator, clean_extraction_tank};
pub use error::{CleanError, Result};
pub use normalization::{
    is_null_literal, normalize_float, normalize_id, normalize_string, normalize_timestamp,
};
