use crate::models::notice::Notice;
use log::warn;

/// Notifier for hosts without a browser, alerts end up in the log
#[derive(Clone, Default)]
pub struct LogNotifier;

impl crate::services::Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        warn!("{notice}");
    }
}
