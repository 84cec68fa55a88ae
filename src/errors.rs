use derive_more::{Display, Error};

/// Failure while reporting the outcome to the order-processing endpoint.
/// Both variants are handled the same way by the form.
#[derive(Debug, Display, Error)]
pub enum ReportingError {
    #[display("reporting endpoint unreachable: {_0}")]
    Transport(#[error(not(source))] String),
    #[display("reporting endpoint answered with status {_0}")]
    Rejected(#[error(not(source))] u16),
}

/// Reason a call to [submit](crate::checkout::CheckoutForm::submit) was ignored
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    /// The payment link has no order id
    InvalidLink,
    /// A submission is still waiting for the endpoint
    AlreadyInFlight,
    /// Pay was requested while some field is not valid yet
    FormIncomplete,
    /// The form already reached a terminal state
    Finished,
}
