use colored::*;
use tracing::warn;

/// Sink for blocking, user-facing failure notices.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Prints alerts to stderr, highlighted so they stand out from the lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        warn!(alert = message, "Search failed");
        eprintln!("{} {}", "⚠️  ALERT:".bold().red(), message.red());
    }
}
