//! Toast-style notifications for the terminal

use std::io::Write;
use xl_core::NotificationSink;

/// Prints each notification on its own line and logs it
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "xl_player::notifications", "{}", message);
        // Fire-and-forget: a closed stdout must not disturb playback
        let _ = writeln!(std::io::stdout().lock(), "  * {message}");
    }
}
