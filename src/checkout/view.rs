use crate::{form::FieldSet, models::notice::Notice};
use serde::Serialize;

/// What the hosting page shows for the current form state
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum FormView {
    /// Blocking error, the link has no order id
    InvalidLink { message: String },
    /// Acknowledgment shown until the delayed navigation fires
    Success { heading: String, subtitle: String },
    /// Declined payment, the page is leaving for the cart
    Redirecting { destination: String },
    Form(FormSnapshot),
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormSnapshot {
    pub order_label: String,
    pub amount_label: String,
    pub fields: FieldSet,
    /// Pay needs valid fields and no submission in flight
    pub pay_enabled: bool,
    /// Declining only needs no submission in flight
    pub decline_enabled: bool,
    pub loading: bool,
    pub notice: Option<Notice>,
}
