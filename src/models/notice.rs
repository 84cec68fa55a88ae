use derive_more::Display;
use serde::Serialize;

/// User-visible alert raised by the form
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Display)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    // reporting call failed, the form is usable again
    #[display("Could not reach the store. Check your internet connection.")]
    ReportingUnavailable,
    // the user simulated a declined payment
    #[display("Payment did not go through. Returning you to the cart.")]
    PaymentDeclined,
}
