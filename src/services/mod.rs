pub mod navigation;
pub mod notification;
pub mod reporting;

use crate::{errors::ReportingError, models};
use async_trait::async_trait;
use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportingService: Send + Sync {
    /// Records the simulated outcome against the order.
    /// Any 2xx answer counts as acknowledged.
    async fn report(
        &self,
        request: &models::submission::SubmissionRequest,
    ) -> Result<(), ReportingError>;
}

pub trait Navigator: Send + Sync {
    /// Full-page navigation away from the form
    fn navigate(&self, url: &str);
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: models::notice::Notice);
}

pub type ImplReportingService = Box<dyn ReportingService>;
pub type ImplNavigator = Arc<dyn Navigator>;
pub type ImplNotifier = Box<dyn Notifier>;
