//! Pipeline error taxonomy.
//!
//! Structural errors (unknown type, empty input) are fatal to the
//! request and surfaced as distinct kinds; value-level problems never
//! reach this enum, they were degraded to absent cells upstream.

use batchrep_transform::CleanError;
use batchrep_xlsx::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The report-type key has no registered cleaner/layout pair.
    #[error("unsupported report type: {0}")]
    UnsupportedReportType(String),

    #[error(transparent)]
    Clean(#[from] CleanError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, ReportError>;
