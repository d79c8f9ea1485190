use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Initialize tracing with structured logging.
///
/// JSON output carries the correlation IDs and structured fields attached
/// to gateway calls; human-readable output is for interactive use.
pub fn init_telemetry(json_logs: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    if json_logs {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .with(filter)
            .init();
    }

    tracing::debug!("Billdesk telemetry initialized");
    Ok(())
}

/// Generate a correlation ID for linking a request through the upstream API.
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span with common workflow gateway attributes
pub fn create_gateway_span(
    operation: &str,
    invoice_id: &str,
    correlation_id: Option<&str>,
) -> tracing::Span {
    tracing::info_span!(
        "workflow_gateway",
        operation = operation,
        invoice.id = invoice_id,
        correlation.id = correlation_id,
    )
}

/// Shutdown telemetry gracefully
pub fn shutdown_telemetry() {
    // Structured logging needs no explicit shutdown.
    tracing::debug!("Billdesk telemetry shutdown complete");
}
