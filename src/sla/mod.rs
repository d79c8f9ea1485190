// SLA evaluation over workflow snapshots.
// Pure functions only; the gateway that fetches snapshots lives in workflow.

pub mod duration;
pub mod evaluator;

pub use duration::format_duration;
pub use evaluator::{
    classify, deadline_formatted, progress_percent, status_text, DisplayHint, SlaClassification,
    SlaStatus, WARNING_WINDOW_HOURS,
};
