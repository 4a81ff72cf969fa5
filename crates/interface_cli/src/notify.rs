//! Notices for terminal users

use core_kernel::NotificationSink;

/// Writes each notice to stderr so stdout carries only the profile
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl NotificationSink for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}
