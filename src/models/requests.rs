use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request body for the above-threshold query
///
/// `threshold` stays a raw JSON value so that an absent field and a
/// wrong-typed field produce distinct validation errors downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboveThresholdRequest {
    #[serde(default, deserialize_with = "raw_value")]
    pub threshold: Option<Value>,
}

/// Keeps an explicit `null` distinct from an absent field: absent
/// falls back to the `None` default, any present value (including
/// `null`) deserializes to `Some`.
fn raw_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_threshold_is_none() {
        let req: AboveThresholdRequest = serde_json::from_str("{}").unwrap();
        assert!(req.threshold.is_none());
    }

    #[test]
    fn test_null_threshold_is_some_null() {
        let req: AboveThresholdRequest =
            serde_json::from_str(r#"{ "threshold": null }"#).unwrap();
        assert_eq!(req.threshold, Some(Value::Null));
    }

    #[test]
    fn test_numeric_threshold_preserved() {
        let req: AboveThresholdRequest =
            serde_json::from_str(r#"{ "threshold": 400 }"#).unwrap();
        assert_eq!(req.threshold, Some(serde_json::json!(400)));
    }
}
