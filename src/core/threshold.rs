use serde_json::Value;
use thiserror::Error;

/// Errors produced while handling an above-threshold query
///
/// The display strings are the user-visible messages; the transport
/// layer maps the validation variants to HTTP 400 and `Internal` to
/// HTTP 500.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Threshold value is required.")]
    MissingThreshold,

    #[error("Threshold must be a non-negative number.")]
    InvalidThreshold,

    #[error("An error occurred while processing the request.")]
    Internal(String),
}

/// Validate the raw `threshold` field of a request body.
///
/// Rules are applied in order and the first failure wins:
/// 1. the field must be present
/// 2. it must be a finite, non-negative JSON number
pub fn validate_threshold(raw: Option<&Value>) -> Result<f64, FilterError> {
    let value = raw.ok_or(FilterError::MissingThreshold)?;
    let threshold = value.as_f64().ok_or(FilterError::InvalidThreshold)?;

    if !threshold.is_finite() || threshold < 0.0 {
        return Err(FilterError::InvalidThreshold);
    }

    Ok(threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_threshold() {
        assert_eq!(
            validate_threshold(None),
            Err(FilterError::MissingThreshold)
        );
    }

    #[test]
    fn test_valid_threshold() {
        assert_eq!(validate_threshold(Some(&json!(400))), Ok(400.0));
        assert_eq!(validate_threshold(Some(&json!(0))), Ok(0.0));
        assert_eq!(validate_threshold(Some(&json!(250.5))), Ok(250.5));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        assert_eq!(
            validate_threshold(Some(&json!(-5))),
            Err(FilterError::InvalidThreshold)
        );
    }

    #[test]
    fn test_non_numeric_threshold_rejected() {
        assert_eq!(
            validate_threshold(Some(&json!("100"))),
            Err(FilterError::InvalidThreshold)
        );
        assert_eq!(
            validate_threshold(Some(&json!(true))),
            Err(FilterError::InvalidThreshold)
        );
        assert_eq!(
            validate_threshold(Some(&json!(null))),
            Err(FilterError::InvalidThreshold)
        );
        assert_eq!(
            validate_threshold(Some(&json!([400]))),
            Err(FilterError::InvalidThreshold)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FilterError::MissingThreshold.to_string(),
            "Threshold value is required."
        );
        assert_eq!(
            FilterError::InvalidThreshold.to_string(),
            "Threshold must be a non-negative number."
        );
    }
}
