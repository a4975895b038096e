//! Multi-listener signals.
//!
//! A [`Signal`] holds any number of listeners and calls them in
//! registration order. A listener that panics is logged and skipped; the
//! remaining listeners still receive the event.

use std::panic::{catch_unwind, AssertUnwindSafe};

/// Handle returned by [`Signal::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener<E> = Box<dyn FnMut(&E)>;

/// Ordered list of listeners for one kind of event.
pub struct Signal<E> {
    name: &'static str,
    listeners: Vec<(ListenerId, Listener<E>)>,
    next_id: u64,
}

impl<E> Signal<E> {
    /// Create an empty signal. `name` appears in log output.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Signal name
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Register a listener; it runs after every listener registered before it.
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered here.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Drop every listener
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Deliver `event` to every listener.
    ///
    /// Returns the number of listeners that panicked.
    pub fn emit(&mut self, event: &E) -> usize {
        let mut panicked = 0;
        for (id, listener) in &mut self.listeners {
            let outcome = catch_unwind(AssertUnwindSafe(|| listener(event)));
            if outcome.is_err() {
                panicked += 1;
                tracing::warn!(signal = self.name, listener = id.0, "listener panicked");
            }
        }
        panicked
    }
}

impl<E> std::fmt::Debug for Signal<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.name)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
