//! SLA Evaluator
//!
//! Pure computation mapping a workflow snapshot and an explicit "now" to an
//! SLA status: classification, human-readable message, progress percentage
//! and a display hint for badge coloring. "now" is always a parameter so
//! evaluations stay deterministic and testable; nothing in here reads a
//! clock or performs I/O.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::duration::format_duration;
use crate::workflow::WorkflowSnapshot;

/// Lead time before a deadline during which an SLA is flagged as at-risk.
pub const WARNING_WINDOW_HOURS: i64 = 2;

fn warning_window() -> Duration {
    Duration::hours(WARNING_WINDOW_HOURS)
}

/// SLA health of an invoice's current workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaClassification {
    /// No deadline attached to the current state.
    None,
    Normal,
    /// Inside the warning window ahead of the deadline.
    Warning,
    Overdue,
}

impl SlaClassification {
    pub fn display_hint(self) -> DisplayHint {
        match self {
            SlaClassification::None => DisplayHint::Gray,
            SlaClassification::Normal => DisplayHint::Green,
            SlaClassification::Warning => DisplayHint::Yellow,
            SlaClassification::Overdue => DisplayHint::Red,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SlaClassification::None => "none",
            SlaClassification::Normal => "normal",
            SlaClassification::Warning => "warning",
            SlaClassification::Overdue => "overdue",
        }
    }
}

/// Color-coding category for status badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayHint {
    Gray,
    Green,
    Yellow,
    Red,
}

impl DisplayHint {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayHint::Gray => "gray",
            DisplayHint::Green => "green",
            DisplayHint::Yellow => "yellow",
            DisplayHint::Red => "red",
        }
    }
}

/// Computed SLA status. Derived on every render and discarded; never
/// persisted or mutated.
#[derive(Debug, Clone, Serialize)]
pub struct SlaStatus {
    pub classification: SlaClassification,
    pub message: String,
    pub progress_percent: u8,
    pub display_hint: DisplayHint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_formatted: Option<String>,
}

impl SlaStatus {
    /// Evaluate the full status for a snapshot at the given instant.
    pub fn evaluate(snapshot: &WorkflowSnapshot, now: DateTime<Utc>) -> Self {
        let classification = classify(snapshot, now);
        Self {
            classification,
            message: status_text(snapshot, now),
            progress_percent: progress_percent(snapshot, now),
            display_hint: classification.display_hint(),
            deadline_formatted: deadline_formatted(snapshot),
        }
    }
}

/// Classify SLA health against the deadline.
pub fn classify(snapshot: &WorkflowSnapshot, now: DateTime<Utc>) -> SlaClassification {
    let Some(deadline) = snapshot.sla_deadline else {
        return SlaClassification::None;
    };

    if now > deadline {
        SlaClassification::Overdue
    } else if now > deadline - warning_window() {
        SlaClassification::Warning
    } else {
        SlaClassification::Normal
    }
}

/// Human-readable status line: "Due in 4 hours", "Overdue by 1 hour",
/// "No SLA".
pub fn status_text(snapshot: &WorkflowSnapshot, now: DateTime<Utc>) -> String {
    let Some(deadline) = snapshot.sla_deadline else {
        return "No SLA".to_string();
    };

    if now > deadline {
        format!("Overdue by {}", format_duration(now - deadline))
    } else {
        format!("Due in {}", format_duration(deadline - now))
    }
}

/// Percentage of the SLA window consumed, clamped to [0, 100].
///
/// A deadline at or before the state entry time counts as fully elapsed;
/// upstream data like that is degenerate but must not divide by zero or
/// report more than 100.
pub fn progress_percent(snapshot: &WorkflowSnapshot, now: DateTime<Utc>) -> u8 {
    let Some(deadline) = snapshot.sla_deadline else {
        return 0;
    };

    let total = (deadline - snapshot.entered_current_state_at).num_seconds();
    let elapsed = (now - snapshot.entered_current_state_at).num_seconds();

    if total <= 0 || elapsed >= total {
        return 100;
    }

    let percent = (elapsed as f64 / total as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

/// Deadline formatted for display, e.g. "Jan 15, 2024 at 02:00 PM".
pub fn deadline_formatted(snapshot: &WorkflowSnapshot) -> Option<String> {
    snapshot
        .sla_deadline
        .map(|deadline| deadline.format("%b %-d, %Y at %I:%M %p").to_string())
}
