//! Terminal rendering for SLA status and available transitions.
//!
//! The evaluator produces data; this module turns it into the status card
//! shown by the CLI. Badge emoji follow the display hint so the output
//! color-codes the same way the web views do.

use crate::sla::{DisplayHint, SlaStatus};
use crate::workflow::{Transition, WorkflowSnapshot};

const PROGRESS_BAR_WIDTH: usize = 20;

fn badge(hint: DisplayHint) -> &'static str {
    match hint {
        DisplayHint::Gray => "⚪",
        DisplayHint::Green => "🟢",
        DisplayHint::Yellow => "🟡",
        DisplayHint::Red => "🔴",
    }
}

fn progress_bar(percent: u8) -> String {
    let percent = percent.min(100);
    let filled = (percent as usize * PROGRESS_BAR_WIDTH) / 100;
    let empty = PROGRESS_BAR_WIDTH - filled;
    format!("[{}{}] {percent}%", "█".repeat(filled), "░".repeat(empty))
}

/// Format the SLA status card for one invoice.
pub fn format_status_card(
    invoice_id: &str,
    snapshot: &WorkflowSnapshot,
    status: &SlaStatus,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("INVOICE {invoice_id}\n"));
    output.push_str("─────────────────────\n");
    output.push_str(&format!("State:    {}\n", snapshot.state));
    output.push_str(&format!(
        "SLA:      {} {}\n",
        badge(status.display_hint),
        status.message
    ));

    if let Some(deadline) = &status.deadline_formatted {
        output.push_str(&format!("Deadline: {deadline}\n"));
        output.push_str(&format!(
            "Progress: {}\n",
            progress_bar(status.progress_percent)
        ));
    }

    output
}

/// Format the transitions the workflow service will currently accept.
pub fn format_transitions(invoice_id: &str, transitions: &[Transition]) -> String {
    let mut output = String::new();

    output.push_str(&format!("AVAILABLE TRANSITIONS for {invoice_id}:\n"));
    if transitions.is_empty() {
        output.push_str("   (none)\n");
        return output;
    }

    for transition in transitions {
        output.push_str(&format!(
            "   • {} → {}\n",
            transition.name, transition.target_state
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_snapshot() -> WorkflowSnapshot {
        WorkflowSnapshot::new(
            "pending_approval",
            Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap(),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()),
        )
    }

    #[test]
    fn test_status_card_shows_state_badge_and_progress() {
        let snapshot = sample_snapshot();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let status = SlaStatus::evaluate(&snapshot, now);

        let card = format_status_card("INV-1042", &snapshot, &status);
        assert!(card.contains("INV-1042"));
        assert!(card.contains("pending_approval"));
        assert!(card.contains("🟢 Due in 2 hours"));
        assert!(card.contains("Jan 15, 2024 at 12:00 PM"));
        assert!(card.contains("50%"));
    }

    #[test]
    fn test_status_card_without_sla_omits_progress() {
        let snapshot = WorkflowSnapshot::new(
            "draft",
            Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap(),
            None,
        );
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let status = SlaStatus::evaluate(&snapshot, now);

        let card = format_status_card("INV-7", &snapshot, &status);
        assert!(card.contains("⚪ No SLA"));
        assert!(!card.contains("Progress:"));
        assert!(!card.contains("Deadline:"));
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0), format!("[{}] 0%", "░".repeat(20)));
        assert_eq!(progress_bar(100), format!("[{}] 100%", "█".repeat(20)));
        assert!(progress_bar(50).contains("50%"));
    }

    #[test]
    fn test_transition_listing() {
        let transitions = vec![
            Transition {
                name: "Approve".to_string(),
                target_state: "approved".to_string(),
            },
            Transition {
                name: "Reject".to_string(),
                target_state: "rejected".to_string(),
            },
        ];

        let listing = format_transitions("INV-3", &transitions);
        assert!(listing.contains("Approve → approved"));
        assert!(listing.contains("Reject → rejected"));

        let empty = format_transitions("INV-3", &[]);
        assert!(empty.contains("(none)"));
    }
}
