//! Error types for record cleaning.

use batchrep_model::ReportType;
use thiserror::Error;

/// Errors that can occur while cleaning a raw result set.
#[derive(Debug, Error)]
pub enum CleanError {
    /// The result set has zero rows; a report cannot be generated.
    #[error("empty report data for {report_type}")]
    EmptyInput { report_type: ReportType },
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_display() {
        let err = CleanError::EmptyInput {
            report_type: ReportType::ExtractionTank,
        };
        assert_eq!(err.to_string(), "empty report data for T_TQ_Batch_Archive");
    }
}
