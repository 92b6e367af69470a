//! Refresh status domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Status value the backend reports once a refresh job has finished.
pub const REFRESH_COMPLETE: i64 = 1;

/// Snapshot of the server-side refresh job.
///
/// Returned by the status endpoint. Only `status` participates in
/// completion detection; `last_update_time` is consumed by display code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    /// Numeric job status. Anything other than [`REFRESH_COMPLETE`] means
    /// the job has not finished.
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: i64,
    /// Whether the backend currently accepts refresh triggers.
    #[serde(default)]
    pub refresh_enable: bool,
    /// When the synced data was last updated, if known.
    #[serde(default)]
    pub last_update_time: Option<DateTime<Utc>>,
}

impl UpdateStatus {
    /// True once the refresh job has reached its terminal status.
    pub fn is_complete(&self) -> bool {
        self.status == REFRESH_COMPLETE
    }
}

/// Accepts the status field as either a JSON number or a numeric string.
///
/// The backend has emitted both shapes; anything unparsable counts as
/// "not finished".
fn deserialize_status<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64().unwrap_or(0),
        serde_json::Value::String(s) => s.parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_status() {
        let status: UpdateStatus =
            serde_json::from_str(r#"{"status": 1, "refreshEnable": true}"#).unwrap();
        assert!(status.is_complete());
        assert!(status.refresh_enable);
        assert!(status.last_update_time.is_none());
    }

    #[test]
    fn parses_string_status() {
        let status: UpdateStatus = serde_json::from_str(r#"{"status": "1"}"#).unwrap();
        assert!(status.is_complete());
    }

    #[test]
    fn missing_or_malformed_status_is_not_complete() {
        let absent: UpdateStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.status, 0);
        assert!(!absent.is_complete());

        let garbage: UpdateStatus = serde_json::from_str(r#"{"status": "soon"}"#).unwrap();
        assert!(!garbage.is_complete());

        let wrong_type: UpdateStatus = serde_json::from_str(r#"{"status": [1]}"#).unwrap();
        assert!(!wrong_type.is_complete());
    }

    #[test]
    fn parses_last_update_time() {
        let status: UpdateStatus = serde_json::from_str(
            r#"{"status": 0, "lastUpdateTime": "2026-08-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert!(status.last_update_time.is_some());
        assert!(!status.is_complete());
    }
}
