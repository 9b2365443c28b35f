//! Browser-side notifier.

use crate::notify::Notifier;

/// Alerts through `window.alert`, diagnostics through `console.error`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(message);
        }
    }

    fn log_error(&self, context: &str, error: &dyn std::error::Error) {
        web_sys::console::error_1(&format!("{context}: {error}").into());
    }
}
