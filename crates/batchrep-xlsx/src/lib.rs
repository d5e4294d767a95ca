#![deny(unsafe_code)]

//! Spreadsheet rendering of sectioned reports.
//!
//! Rendering is split in two: [`plan`] turns the title and sections into
//! an immutable list of render instructions (testable without a
//! workbook), and [`finalize`] applies that list to a fresh
//! `rust_xlsxwriter` workbook and serializes it to an in-memory buffer.

pub mod error;
pub mod plan;
pub mod writer;

pub use error::{RenderError, Result};
pub use plan::{BandStyle, RenderOp, RenderPlan, RowStyle, plan};
pub use writer::{DEFAULT_COLUMN_WIDTH, finalize, render};
