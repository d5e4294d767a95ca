//! Rendering errors.

use thiserror::Error;

/// Errors that can occur while finalizing a workbook.
///
/// Only structural workbook failures surface here; value-level problems
/// were already absorbed upstream as absent cells.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Workbook construction or serialization failed.
    #[error("workbook serialization failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
