/// Core traits for the XL Beats player

/// Fire-and-forget sink for user-visible notifications (toasts)
///
/// No acknowledgement is awaited; implementations must not block.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notification sink that writes to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "xl_core::notifications", "{}", message);
    }
}
