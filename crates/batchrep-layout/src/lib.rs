#![deny(unsafe_code)]

//! Section builders: map a cleaned record onto the fixed report grid.
//!
//! Builders are pure functions of the record plus the caller-supplied
//! generation timestamp; section order matches render order exactly.

pub mod concentrator;
pub mod extraction_tank;

pub use concentrator::build_concentrator;
pub use extraction_tank::{EXTRACTION_TANK_COLUMNS, build_extraction_tank};
