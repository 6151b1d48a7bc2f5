use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One student's entry as stored in the dataset file
///
/// The source file may carry per-subject marks alongside the
/// aggregate; only `name` and `total` ever reach the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub marks: BTreeMap<String, u32>,
    pub total: u32,
}

/// Projection of a record onto the response shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub name: String,
    pub total: u32,
}

impl From<&StudentRecord> for StudentSummary {
    fn from(record: &StudentRecord) -> Self {
        Self {
            name: record.name.clone(),
            total: record.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_projection_drops_marks() {
        let record = StudentRecord {
            name: "Alice Johnson".to_string(),
            marks: BTreeMap::from([("maths".to_string(), 148)]),
            total: 433,
        };

        let summary = StudentSummary::from(&record);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "name": "Alice Johnson", "total": 433 })
        );
    }

    #[test]
    fn test_record_parses_without_marks() {
        let record: StudentRecord =
            serde_json::from_str(r#"{ "name": "Bob Smith", "total": 410 }"#).unwrap();

        assert_eq!(record.name, "Bob Smith");
        assert_eq!(record.total, 410);
        assert!(record.marks.is_empty());
    }
}
