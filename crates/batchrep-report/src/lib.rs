#![deny(unsafe_code)]

//! Report type registry and the end-to-end report pipeline.
//!
//! `generate(report_type, rows)` is the single entry point external
//! callers need; `resolve` and [`pipeline::prepare`] are exposed so the
//! intermediate steps stay individually testable.

pub mod error;
pub mod pipeline;
pub mod registry;

pub use error::{ReportError, Result};
pub use pipeline::{PreparedReport, generate, prepare, prepare_at};
pub use registry::{ReportSpec, registered_types, resolve};
