//! User-facing alerts and diagnostic logging.

/// Alert texts shown to the user.
pub mod alerts {
    pub const ANIMALS_FAILED: &str = "Failed to load animals";
    pub const MEAT_PARTS_FAILED: &str = "Failed to load meat parts";
    pub const INVENTORY_FAILED: &str = "Failed to load inventory";
    pub const ADD_FAILED: &str = "Failed to add inventory";
    pub const ADDED: &str = "Inventory added successfully!";
    pub const SELECT_MEAT_PART: &str = "Please select a meat part.";
}

/// Where the controller reports outcomes.
pub trait Notifier {
    /// Show a message to the user.
    fn alert(&self, message: &str);

    /// Record a diagnostic for a failed operation.
    fn log_error(&self, context: &str, error: &dyn std::error::Error) {
        tracing::error!(error = %error, "{context}");
    }
}

/// Prints alerts to stderr; diagnostics go through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}
