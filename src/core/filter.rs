use crate::core::threshold::{validate_threshold, FilterError};
use crate::models::{StudentRecord, StudentSummary, ThresholdMatches};
use serde_json::Value;

/// Select every record whose total strictly exceeds `threshold`.
///
/// Dataset order is preserved and the boundary value itself is
/// excluded; records are projected down to `{name, total}`.
#[inline]
pub fn students_above(records: &[StudentRecord], threshold: f64) -> Vec<StudentSummary> {
    records
        .iter()
        .filter(|record| f64::from(record.total) > threshold)
        .map(StudentSummary::from)
        .collect()
}

/// Validate a raw threshold and run the filter against `records`.
///
/// Validation completes before any filtering happens, so an error is
/// never accompanied by partial results. A query that matches nothing
/// is a success with `count == 0`.
pub fn above_threshold(
    records: &[StudentRecord],
    raw_threshold: Option<&Value>,
) -> Result<ThresholdMatches, FilterError> {
    let threshold = validate_threshold(raw_threshold)?;
    let students = students_above(records, threshold);

    Ok(ThresholdMatches {
        count: students.len(),
        students,
    })
}
