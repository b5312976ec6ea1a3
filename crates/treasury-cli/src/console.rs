//! Terminal rendering of notifications.

use colored::Colorize;
use treasury_core::notification::{Notification, Notifier, Severity};

/// Prints notifications as they arrive, colored by severity.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!("[ConsoleNotifier] {}", notification.title);
        println!("{}", render(&notification));
    }
}

pub fn render(notification: &Notification) -> String {
    let title = match notification.severity {
        Severity::Default => notification.title.bright_green().bold(),
        Severity::Destructive => notification.title.bright_red().bold(),
    };
    format!("{} {}", title, notification.description.bright_black())
}
