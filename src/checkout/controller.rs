//! # Checkout form controller
//!
//! Owns the normalized field values and the submission state machine of a
//! single payment form:
//!
//! ```text
//! idle ──submit──▶ loading ──2xx + success──▶ success ──2s──▶ navigate(success url)
//!   ▲                 │
//!   │                 ├──2xx + failed──▶ failed_redirect ──▶ navigate(failure url)
//!   │                 │
//!   └─ idle_with_error ◀──transport error / non 2xx
//! ```
//!
//! A link without order id starts (and stays) in `invalid_link`.

use super::{
    state::FormStatus,
    view::{FormSnapshot, FormView},
};
use crate::{
    config::CheckoutConfig,
    consts,
    errors::SubmitRejected,
    form::FieldSet,
    models::{
        notice::Notice,
        session::SessionContext,
        submission::{PaymentOutcome, SubmissionRequest},
    },
    services::{
        ImplNavigator, ImplNotifier, ImplReportingService, navigation::ScheduledNavigation,
    },
};
use log::{debug, error, info, warn};
use std::sync::{Mutex, MutexGuard, PoisonError};

struct FormState {
    fields: FieldSet,
    /// Recomputed on every field change
    is_valid: bool,
    status: FormStatus,
    last_notice: Option<Notice>,
    pending_navigation: Option<ScheduledNavigation>,
    mounted: bool,
}

/// One payment form bound to the order of its link
pub struct CheckoutForm {
    config: CheckoutConfig,
    session: SessionContext,
    reporter: ImplReportingService,
    navigator: ImplNavigator,
    notifier: ImplNotifier,
    // never held across an await
    state: Mutex<FormState>,
}

impl CheckoutForm {
    pub fn new(
        config: CheckoutConfig,
        session: SessionContext,
        reporter: ImplReportingService,
        navigator: ImplNavigator,
        notifier: ImplNotifier,
    ) -> Self {
        let status = if session.has_order() {
            FormStatus::Idle
        } else {
            error!("payment link without orderId, form disabled");
            FormStatus::InvalidLink
        };

        Self {
            config,
            session,
            reporter,
            navigator,
            notifier,
            state: Mutex::new(FormState {
                fields: FieldSet::default(),
                is_valid: false,
                status,
                last_notice: None,
                pending_navigation: None,
                mounted: true,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn status(&self) -> FormStatus {
        self.state().status
    }

    pub fn fields(&self) -> FieldSet {
        self.state().fields.clone()
    }

    pub fn is_valid(&self) -> bool {
        self.state().is_valid
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.state().last_notice
    }

    /// Whether the pay action is enabled
    pub fn can_pay(&self) -> bool {
        let state = self.state();
        state.status.accepts_submit() && state.is_valid
    }

    /// Whether the decline-simulation action is enabled
    pub fn can_decline(&self) -> bool {
        self.state().status.accepts_submit()
    }

    /// Applies `change` and recomputes validity.
    /// Terminal states show no form, input there is dropped.
    fn update_fields(&self, change: impl FnOnce(FieldSet) -> FieldSet) -> FieldSet {
        let mut state = self.state();
        if !state.status.is_interactive() {
            debug!("ignoring input while form is {}", state.status);
            return state.fields.clone();
        }

        state.fields = change(std::mem::take(&mut state.fields));
        state.is_valid = state.fields.is_valid();
        state.fields.clone()
    }

    /// Stores the normalized card number and returns it
    pub fn input_card_number(&self, raw: &str) -> String {
        self.update_fields(|fields| fields.with_card_number(raw))
            .card_number()
            .to_string()
    }

    pub fn input_expiry(&self, raw: &str) -> String {
        self.update_fields(|fields| fields.with_expiry(raw))
            .expiry()
            .to_string()
    }

    pub fn input_cvv(&self, raw: &str) -> String {
        self.update_fields(|fields| fields.with_cvv(raw))
            .cvv()
            .to_string()
    }

    pub fn input_holder_name(&self, raw: &str) -> String {
        self.update_fields(|fields| fields.with_holder_name(raw))
            .holder_name()
            .to_string()
    }

    pub fn set_agreed(&self, agreed: bool) -> bool {
        self.update_fields(|fields| fields.with_agreed(agreed))
            .agreed()
    }

    /// Success destination, the link's `returnUrl` wins over the configured one
    pub fn success_destination(&self) -> String {
        self.session
            .return_url
            .clone()
            .unwrap_or_else(|| self.config.success_url())
    }

    pub fn failure_destination(&self) -> String {
        self.config.failure_url()
    }

    /// Reports `outcome` for the order and moves the form along.
    ///
    /// Only one submission can be in flight. A failed report is not an error
    /// here: the form goes back to an interactive state and the user is
    /// notified, the returned status says which path was taken.
    pub async fn submit(&self, outcome: PaymentOutcome) -> Result<FormStatus, SubmitRejected> {
        let order_id = {
            let mut state = self.state();
            match state.status {
                FormStatus::InvalidLink => return Err(SubmitRejected::InvalidLink),
                FormStatus::Loading => {
                    debug!("submit ignored, a submission is already in flight");
                    return Err(SubmitRejected::AlreadyInFlight);
                }
                status if status.is_terminal() || !state.mounted => {
                    return Err(SubmitRejected::Finished);
                }
                _ => {}
            }

            if outcome == PaymentOutcome::Success && !state.is_valid {
                return Err(SubmitRejected::FormIncomplete);
            }
            let Some(order_id) = self.session.order_id else {
                return Err(SubmitRejected::InvalidLink);
            };

            state.status = FormStatus::Loading;
            state.last_notice = None;
            order_id
        };

        let request = SubmissionRequest::new(order_id, outcome);
        info!("reporting order {order_id} as {outcome}");
        let reported = self.reporter.report(&request).await;

        let mut state = self.state();
        let mounted = state.mounted;

        if let Err(e) = reported {
            warn!("order {order_id} not reported, form is usable again: {e}");
            state.status = FormStatus::IdleWithError;
            state.last_notice = Some(Notice::ReportingUnavailable);
            drop(state);

            if mounted {
                self.notifier.notify(Notice::ReportingUnavailable);
            }
            return Ok(FormStatus::IdleWithError);
        }

        match outcome {
            PaymentOutcome::Success => {
                state.status = FormStatus::Success;
                if mounted {
                    state.pending_navigation = Some(ScheduledNavigation::schedule(
                        self.navigator.clone(),
                        self.success_destination(),
                        self.config.success_redirect_delay(),
                    ));
                } else {
                    warn!("form unmounted while reporting, skipping navigation");
                }
                Ok(FormStatus::Success)
            }
            PaymentOutcome::Failed => {
                state.status = FormStatus::FailedRedirect;
                state.last_notice = Some(Notice::PaymentDeclined);
                drop(state);

                if mounted {
                    self.notifier.notify(Notice::PaymentDeclined);
                    self.navigator.navigate(&self.failure_destination());
                } else {
                    warn!("form unmounted while reporting, skipping navigation");
                }
                Ok(FormStatus::FailedRedirect)
            }
        }
    }

    /// Hands the pending success navigation to the caller, e.g. to await it.
    /// Once taken, unmounting the form no longer cancels it.
    pub fn take_pending_navigation(&self) -> Option<ScheduledNavigation> {
        self.state().pending_navigation.take()
    }

    pub fn has_pending_navigation(&self) -> bool {
        self.state()
            .pending_navigation
            .as_ref()
            .is_some_and(ScheduledNavigation::is_pending)
    }

    /// The hosting page went away: pending navigation is cancelled and a
    /// submission still in flight will not navigate when it completes.
    pub fn unmount(&self) {
        let mut state = self.state();
        state.mounted = false;
        if let Some(navigation) = state.pending_navigation.take() {
            info!("form unmounted, cancelling pending navigation");
            navigation.cancel();
        }
    }

    fn amount_label(&self) -> String {
        match &self.session.amount {
            Some(amount) => format!("{amount} {}", self.config.currency_symbol),
            None => consts::AMOUNT_NOT_SPECIFIED_MSG.to_string(),
        }
    }

    /// Snapshot of what should be on screen right now
    pub fn view(&self) -> FormView {
        let state = self.state();
        match state.status {
            FormStatus::InvalidLink => FormView::InvalidLink {
                message: consts::INVALID_LINK_MSG.into(),
            },
            FormStatus::Success => FormView::Success {
                heading: consts::SUCCESS_HEADING_MSG.into(),
                subtitle: consts::SUCCESS_SUBTITLE_MSG.into(),
            },
            FormStatus::FailedRedirect => FormView::Redirecting {
                destination: self.failure_destination(),
            },
            FormStatus::Idle | FormStatus::IdleWithError | FormStatus::Loading => {
                let loading = state.status == FormStatus::Loading;
                FormView::Form(FormSnapshot {
                    order_label: format!("Order #{}", self.session.order_id.unwrap_or_default()),
                    amount_label: self.amount_label(),
                    fields: state.fields.clone(),
                    pay_enabled: state.is_valid && !loading,
                    decline_enabled: !loading,
                    loading,
                    notice: state.last_notice,
                })
            }
        }
    }
}

impl Drop for CheckoutForm {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(navigation) = state.pending_navigation.take() {
            navigation.cancel();
        }
    }
}
