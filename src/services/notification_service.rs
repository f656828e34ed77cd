use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

/// Toast delivery seam. The shell surfaces these to the operator; the
/// directory core only needs the hook to be injectable.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&self, kind: NotifyKind, message: &str);
}

/// Default sink that lands notifications on the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NotifyKind, message: &str) {
        match kind {
            NotifyKind::Success => info!(target: "notifications", "{message}"),
            NotifyKind::Error => error!(target: "notifications", "{message}"),
        }
    }
}
