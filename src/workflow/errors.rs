use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the workflow service gateway.
///
/// The gateway never retries or swallows these; callers decide what to do.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Upstream rejected the transition: invalid target or the invoice is
    /// no longer in the state the transition was computed against.
    #[error("invalid workflow transition: {0}")]
    Validation(String),

    /// Token expired or rejected by the workflow service.
    #[error("workflow service authentication failed: {0}")]
    Authentication(String),

    /// Network-level timeout talking to the workflow service.
    #[error("workflow service timed out: {0}")]
    Timeout(String),

    /// Generic upstream failure (5xx, connection refused, ...).
    #[error("workflow service error: {0}")]
    Api(String),

    /// Upstream responded but the payload could not be decoded.
    #[error("malformed workflow payload: {0}")]
    Parse(String),
}

impl WorkflowError {
    /// Map a non-success HTTP status to the error taxonomy.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        let detail = if body.trim().is_empty() {
            status.to_string()
        } else {
            format!("{status}: {body}")
        };

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                WorkflowError::Authentication(detail)
            }
            StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                WorkflowError::Validation(detail)
            }
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                WorkflowError::Timeout(detail)
            }
            _ => WorkflowError::Api(detail),
        }
    }
}

impl From<reqwest::Error> for WorkflowError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WorkflowError::Timeout(err.to_string())
        } else if err.is_decode() {
            WorkflowError::Parse(err.to_string())
        } else {
            WorkflowError::Api(err.to_string())
        }
    }
}

impl From<serde_json::Error> for WorkflowError {
    fn from(err: serde_json::Error) -> Self {
        WorkflowError::Parse(err.to_string())
    }
}
