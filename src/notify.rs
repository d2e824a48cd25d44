//! User-facing completion notices

use tracing::info;

/// Toast-style notification sink. Fire-and-forget: no return value is
/// consumed and delivery is not awaited.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, duration_ms: u64);
}

/// Default sink for embedders without a toast surface: emits to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, duration_ms: u64) {
        info!(duration_ms, "{message}");
    }
}
