// Billdesk Library - Invoice Workflow SLA Tracking
// This exposes the core components for testing and integration

pub mod config;
pub mod render;
pub mod sla;
pub mod telemetry;
pub mod workflow;

// Re-export key types for easy access
pub use config::{config, init_config, BilldeskConfig, UpstreamConfig};
pub use render::{format_status_card, format_transitions};
pub use sla::{
    classify, deadline_formatted, format_duration, progress_percent, status_text, DisplayHint,
    SlaClassification, SlaStatus, WARNING_WINDOW_HOURS,
};
pub use telemetry::{generate_correlation_id, init_telemetry, shutdown_telemetry};
pub use workflow::{Transition, WorkflowClient, WorkflowError, WorkflowGateway, WorkflowSnapshot};
