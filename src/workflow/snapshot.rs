//! Workflow snapshot as supplied by the upstream workflow service.
//!
//! The snapshot is decoded once at the service boundary into a canonical
//! typed form. Timestamps are RFC 3339; a malformed timestamp fails the
//! decode with a parse error instead of leaking an invalid date into the
//! evaluator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time view of an invoice's workflow state.
///
/// `sla_deadline` is genuinely optional: absence means no SLA applies to
/// the current state and is a valid, non-error input to the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSnapshot {
    /// Workflow state name as the upstream service reports it.
    pub state: String,
    /// When the invoice entered its current state.
    pub entered_current_state_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla_deadline: Option<DateTime<Utc>>,
    /// Upstream's own overdue flag. Advisory only; classification is always
    /// recomputed from the timestamps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overdue: Option<bool>,
}

impl WorkflowSnapshot {
    pub fn new(
        state: impl Into<String>,
        entered_current_state_at: DateTime<Utc>,
        sla_deadline: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            state: state.into(),
            entered_current_state_at,
            sla_deadline,
            overdue: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_decodes_full_snapshot() {
        let json = r#"{
            "state": "pending_approval",
            "entered_current_state_at": "2024-01-15T08:00:00Z",
            "sla_deadline": "2024-01-15T14:00:00Z",
            "overdue": false
        }"#;

        let snapshot: WorkflowSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.state, "pending_approval");
        assert_eq!(
            snapshot.entered_current_state_at,
            Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap()
        );
        assert_eq!(
            snapshot.sla_deadline,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 14, 0, 0).unwrap())
        );
        assert_eq!(snapshot.overdue, Some(false));
    }

    #[test]
    fn test_missing_deadline_decodes_as_none() {
        let json = r#"{
            "state": "draft",
            "entered_current_state_at": "2024-01-15T08:00:00Z"
        }"#;

        let snapshot: WorkflowSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.sla_deadline, None);
        assert_eq!(snapshot.overdue, None);
    }

    #[test]
    fn test_malformed_timestamp_fails_decode() {
        let json = r#"{
            "state": "draft",
            "entered_current_state_at": "not-a-timestamp"
        }"#;

        assert!(serde_json::from_str::<WorkflowSnapshot>(json).is_err());
    }

    #[test]
    fn test_missing_entry_timestamp_fails_decode() {
        let json = r#"{"state": "draft"}"#;
        assert!(serde_json::from_str::<WorkflowSnapshot>(json).is_err());
    }
}
