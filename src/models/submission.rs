use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Outcome chosen by the user in the sandbox form
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Display)]
#[serde(rename_all = "snake_case")]
pub enum PaymentOutcome {
    #[display("success")]
    Success,
    #[display("failed")]
    Failed,
}

/// Body posted to the order-processing endpoint
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SubmissionRequest {
    #[serde(rename = "orderId")]
    pub order_id: i64,
    pub status: PaymentOutcome,
}

impl SubmissionRequest {
    pub fn new(order_id: i64, status: PaymentOutcome) -> Self {
        Self { order_id, status }
    }
}
