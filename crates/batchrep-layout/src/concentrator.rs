//! Double-effect concentrator report layout.

use batchrep_model::{ConcentratorRecord, Section};
use chrono::NaiveDateTime;

/// Build the sections for one concentrator batch run.
///
/// The concentrator layout has not been specified yet; an empty section
/// list renders as a title-only document.
pub fn build_concentrator(
    _record: &ConcentratorRecord,
    _generated_at: NaiveDateTime,
) -> Vec<Section> {
    Vec::new()
}
