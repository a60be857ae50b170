//! Change notification for saved records
//!
//! A form that saves successfully announces it so the list view behind it
//! can refresh. The publishing form owns its listener list outright; there
//! is no global registry and no unsubscribe. Listeners live as long as the
//! form does.

use std::fmt;

/// Callback invoked after a successful save
pub trait DataChangeListener {
    /// React to saved data, typically by re-querying the store
    fn on_data_changed(&mut self);
}

/// Plain closures subscribe directly
impl<F: FnMut()> DataChangeListener for F {
    fn on_data_changed(&mut self) {
        self();
    }
}

/// Synchronous fan-out to the registered listeners
///
/// Listeners fire in subscription order, on the caller's thread. Failures
/// are not swallowed: a panicking listener unwinds straight through
/// [`ChangeNotifier::notify_all`] to its caller.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<Box<dyn DataChangeListener>>,
}

impl ChangeNotifier {
    /// Create a notifier with no listeners
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for the notifier's whole lifetime
    pub fn subscribe(&mut self, listener: impl DataChangeListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Invoke every listener once, in subscription order
    pub fn notify_all(&mut self) {
        for listener in &mut self.listeners {
            listener.on_data_changed();
        }
    }

    /// Number of registered listeners
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check whether no listener is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
