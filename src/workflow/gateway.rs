//! Gateway contract for the upstream workflow service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::errors::WorkflowError;
use super::snapshot::WorkflowSnapshot;

/// A transition the workflow service will currently accept for an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Display name, e.g. "Approve" or "Send to customer".
    pub name: String,
    pub target_state: String,
}

/// Trait for workflow service operations to enable testing with fakes.
///
/// Implementations do not retry beyond the HTTP client defaults and do not
/// cache: `apply_transition` returns the updated snapshot so the SLA
/// evaluator can be re-run against it immediately.
#[async_trait]
pub trait WorkflowGateway {
    async fn fetch_snapshot(&self, invoice_id: &str) -> Result<WorkflowSnapshot, WorkflowError>;

    async fn fetch_available_transitions(
        &self,
        invoice_id: &str,
    ) -> Result<Vec<Transition>, WorkflowError>;

    async fn apply_transition(
        &self,
        invoice_id: &str,
        target_state: &str,
        comment: Option<&str>,
    ) -> Result<WorkflowSnapshot, WorkflowError>;
}
