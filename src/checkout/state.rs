use derive_more::Display;
use serde::Serialize;

/// Lifecycle of one form instance.
///
/// `Idle` and `IdleWithError` accept submissions, `Loading` waits for the
/// reporting endpoint, the rest are terminal.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Display)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    /// The link carried no order id, the form is never shown
    #[display("invalid_link")]
    InvalidLink,
    #[default]
    #[display("idle")]
    Idle,
    #[display("loading")]
    Loading,
    #[display("success")]
    Success,
    #[display("idle_with_error")]
    IdleWithError,
    #[display("failed_redirect")]
    FailedRedirect,
}

impl FormStatus {
    /// States where the form is rendered and the user can type
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Idle | Self::IdleWithError | Self::Loading)
    }

    pub fn accepts_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::IdleWithError)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::InvalidLink | Self::Success | Self::FailedRedirect)
    }
}
