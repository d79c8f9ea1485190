//! Property tests for the SLA evaluator
//!
//! The evaluator must be total: any snapshot/now pair yields a bounded
//! progress value, a classification, and a well-formed message without
//! panicking.

use billdesk::sla::{classify, format_duration, progress_percent, status_text, SlaClassification};
use billdesk::workflow::WorkflowSnapshot;
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

proptest! {
    #[test]
    fn progress_is_always_bounded(
        entry in 0i64..2_000_000_000,
        total in -100_000i64..10_000_000,
        elapsed in -100_000i64..10_000_000,
    ) {
        let snapshot = WorkflowSnapshot::new("state", ts(entry), Some(ts(entry + total)));
        let percent = progress_percent(&snapshot, ts(entry + elapsed));
        prop_assert!(percent <= 100);
    }

    #[test]
    fn classification_matches_message_prefix(
        entry in 0i64..2_000_000_000,
        offset in -10_000_000i64..10_000_000,
        now_offset in -10_000_000i64..10_000_000,
    ) {
        let snapshot = WorkflowSnapshot::new("state", ts(entry), Some(ts(entry + offset)));
        let now = ts(entry + now_offset);

        let message = status_text(&snapshot, now);
        match classify(&snapshot, now) {
            SlaClassification::Overdue => prop_assert!(message.starts_with("Overdue by ")),
            SlaClassification::Warning | SlaClassification::Normal => {
                prop_assert!(message.starts_with("Due in "))
            }
            SlaClassification::None => prop_assert_eq!(message, "No SLA"),
        }
    }

    #[test]
    fn no_deadline_is_always_none(
        entry in 0i64..2_000_000_000,
        now_offset in -10_000_000i64..10_000_000,
    ) {
        let snapshot = WorkflowSnapshot::new("state", ts(entry), None);
        let now = ts(entry + now_offset);

        prop_assert_eq!(classify(&snapshot, now), SlaClassification::None);
        prop_assert_eq!(progress_percent(&snapshot, now), 0);
        prop_assert_eq!(status_text(&snapshot, now), "No SLA");
    }

    #[test]
    fn format_duration_emits_at_most_two_components(seconds in -100_000i64..100_000_000) {
        let formatted = format_duration(Duration::seconds(seconds));
        prop_assert!(!formatted.is_empty());
        prop_assert!(formatted.matches(", ").count() <= 1);
    }

    #[test]
    fn overdue_always_reports_full_progress(
        entry in 0i64..2_000_000_000,
        total in 1i64..10_000_000,
        past in 1i64..10_000_000,
    ) {
        let deadline = ts(entry + total);
        let snapshot = WorkflowSnapshot::new("state", ts(entry), Some(deadline));
        let now = deadline + Duration::seconds(past);

        prop_assert_eq!(classify(&snapshot, now), SlaClassification::Overdue);
        prop_assert_eq!(progress_percent(&snapshot, now), 100);
    }
}
