//! HTTP implementation of the workflow gateway.
//!
//! Thin pass-through to the upstream billing API: every call is one HTTP
//! request, rate-limited and mapped onto the `WorkflowError` taxonomy. No
//! snapshot caching and no retries beyond the HTTP client defaults.

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Jitter, Quota, RateLimiter};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, Instrument};

use super::errors::WorkflowError;
use super::gateway::{Transition, WorkflowGateway};
use super::snapshot::WorkflowSnapshot;
use crate::config::UpstreamConfig;
use crate::telemetry::{create_gateway_span, generate_correlation_id};

/// Rate-limited HTTP client for the upstream workflow service.
#[derive(Debug)]
pub struct WorkflowClient {
    http: reqwest::Client,
    rate_limiter: Arc<DefaultDirectRateLimiter>,
    base_url: String,
    token: String,
}

#[derive(Debug, Serialize)]
struct TransitionRequest<'a> {
    target_state: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
}

impl WorkflowClient {
    /// Create a new client from upstream settings.
    pub fn new(config: &UpstreamConfig) -> Result<Self, WorkflowError> {
        let token = config.token.clone().ok_or_else(|| {
            WorkflowError::Authentication(
                "no API token configured (set BILLDESK_API_TOKEN)".to_string(),
            )
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        let per_second =
            NonZeroU32::new(config.rate_limit.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(config.rate_limit.burst_capacity).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::per_second(per_second).allow_burst(burst);
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Ok(Self {
            http,
            rate_limiter,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Create a client from the global configuration.
    pub fn from_config() -> Result<Self, WorkflowError> {
        let config = crate::config::config().map_err(|e| WorkflowError::Api(e.to_string()))?;
        Self::new(&config.upstream)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        correlation_id: &str,
    ) -> Result<T, WorkflowError> {
        self.rate_limiter
            .until_ready_with_jitter(Jitter::up_to(Duration::from_millis(100)))
            .await;

        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET workflow service");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header("X-Correlation-Id", correlation_id)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        correlation_id: &str,
    ) -> Result<T, WorkflowError> {
        self.rate_limiter
            .until_ready_with_jitter(Jitter::up_to(Duration::from_millis(100)))
            .await;

        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST workflow service");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header("X-Correlation-Id", correlation_id)
            .json(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Decode boundary: non-success statuses map onto the error taxonomy,
    /// success bodies must deserialize cleanly or fail with a parse error.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, WorkflowError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WorkflowError::from_status(status, body));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl WorkflowGateway for WorkflowClient {
    async fn fetch_snapshot(&self, invoice_id: &str) -> Result<WorkflowSnapshot, WorkflowError> {
        let correlation_id = generate_correlation_id();
        let span = create_gateway_span("fetch_snapshot", invoice_id, Some(&correlation_id));
        self.get_json(&format!("/invoices/{invoice_id}/workflow"), &correlation_id)
            .instrument(span)
            .await
    }

    async fn fetch_available_transitions(
        &self,
        invoice_id: &str,
    ) -> Result<Vec<Transition>, WorkflowError> {
        let correlation_id = generate_correlation_id();
        let span = create_gateway_span("fetch_transitions", invoice_id, Some(&correlation_id));
        self.get_json(
            &format!("/invoices/{invoice_id}/workflow/transitions"),
            &correlation_id,
        )
        .instrument(span)
        .await
    }

    async fn apply_transition(
        &self,
        invoice_id: &str,
        target_state: &str,
        comment: Option<&str>,
    ) -> Result<WorkflowSnapshot, WorkflowError> {
        let correlation_id = generate_correlation_id();
        let span = create_gateway_span("apply_transition", invoice_id, Some(&correlation_id));
        let request = TransitionRequest {
            target_state,
            comment,
        };
        self.post_json(
            &format!("/invoices/{invoice_id}/workflow/transition"),
            &request,
            &correlation_id,
        )
        .instrument(span)
        .await
    }
}
