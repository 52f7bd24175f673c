//! Wire types for probe log records.
//!
//! Each input line is one [`Record`]: the instant a probe run happened and
//! the per-site observations it produced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One probe run: a timestamp plus every site observation taken at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// When the probe run happened. Any RFC 3339 offset is accepted and
    /// normalized to UTC.
    pub timestamp: DateTime<Utc>,

    /// Observations in probe order.
    #[serde(rename = "availability")]
    pub probes: Vec<Probe>,
}

/// A single site's observation within a record.
///
/// `available` is only meaningful when `error` is false; the producer does
/// not validate the combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Probe {
    pub site_name: String,
    pub error: bool,
    pub available: bool,
}

impl Probe {
    pub fn new(site_name: impl Into<String>, error: bool, available: bool) -> Self {
        Self {
            site_name: site_name.into(),
            error,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "timestamp": "2024-11-03T10:15:00.000Z",
            "availability": [
                {"siteName": "canon", "error": false, "available": true},
                {"siteName": "fotoplus", "error": true, "available": false}
            ]
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.timestamp.to_rfc3339(), "2024-11-03T10:15:00+00:00");
        assert_eq!(record.probes.len(), 2);
        assert_eq!(record.probes[0], Probe::new("canon", false, true));
        assert!(record.probes[1].error);
    }

    #[test]
    fn test_offset_is_normalized_to_utc() {
        let json = r#"{"timestamp": "2024-11-03T12:00:00+02:00", "availability": []}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.timestamp.to_rfc3339(), "2024-11-03T10:00:00+00:00");
    }

    #[test]
    fn test_missing_probe_field_is_rejected() {
        let json = r#"{"timestamp": "2024-11-03T10:00:00Z",
                       "availability": [{"siteName": "canon", "available": true}]}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }
}
