//! # Order-processing webhook client
//!
//! Posts the simulated payment outcome to the store's order-processing
//! endpoint. The response body is never read, only its status.

use crate::{errors::ReportingError, models::submission::SubmissionRequest};
use async_trait::async_trait;
use log::{error, info};

/// HTTP client for the order-processing endpoint
#[derive(Clone)]
pub struct WebhookReporter {
    /// HTTP client for making requests, default timeouts
    client: reqwest::Client,
    /// Url receiving the `POST`
    endpoint: String,
}

impl WebhookReporter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl crate::services::ReportingService for WebhookReporter {
    async fn report(&self, request: &SubmissionRequest) -> Result<(), ReportingError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("order {} couldnt be reported: {e}", request.order_id);
                ReportingError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(
                "order {} report answered with status {status}",
                request.order_id
            );
            return Err(ReportingError::Rejected(status.as_u16()));
        }

        info!(
            "order {} reported as {} ({status})",
            request.order_id, request.status
        );
        Ok(())
    }
}
