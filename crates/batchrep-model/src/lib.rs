#![deny(unsafe_code)]

//! Core data model for batch-record report generation.
//!
//! A report request starts from a single denormalized archive row
//! ([`RawRow`]), is cleaned into a typed per-device record
//! ([`ReportRecord`]), laid out as ordered [`Section`]s, and finally
//! rendered into a workbook by the `batchrep-xlsx` crate.

pub mod raw;
pub mod record;
pub mod report_type;
pub mod scalar;
pub mod section;

pub use raw::{RawRow, RawValue};
pub use record::{BatchInfo, ConcentratorRecord, ExtractionTankRecord, ReportRecord};
pub use report_type::ReportType;
pub use scalar::Scalar;
pub use section::{Section, SectionKind, SectionRow};
