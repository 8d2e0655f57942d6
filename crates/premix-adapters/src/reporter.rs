//! Reporter adapters.

use std::sync::{Arc, Mutex};

use premix_core::application::ports::Reporter;

/// Reporter that collects messages for later inspection (testing).
///
/// Clones share the underlying buffer, so one clone can go into a
/// generator while the test keeps the other for assertions.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl CollectingReporter {
    /// Create a new empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in delivery order.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl Reporter for CollectingReporter {
    fn step_completed(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
