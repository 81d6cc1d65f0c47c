//! Focus event subscription
//!
//! Reload-on-focus is modeled as an explicit subscription the caller owns:
//! the embedding app fires `focus()` whenever the screen becomes active, and
//! every subscriber runs. The dashboard itself stays a plain value that any
//! subscriber may drive.

/// Caller-owned focus event fan-out
#[derive(Default)]
pub struct FocusNotifier {
    subscribers: Vec<Box<dyn FnMut()>>,
}

impl FocusNotifier {
    /// Create a notifier with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback to run on every focus event
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Fire a focus event, running every subscriber in registration order
    pub fn focus(&mut self) {
        for subscriber in &mut self.subscribers {
            subscriber();
        }
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for FocusNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusNotifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
