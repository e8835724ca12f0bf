//! Listener registry and scoped subscription guards.
//!
//! DESIGN
//! ======
//! Both the identity provider adapters and the auth store fan events out to
//! registered callbacks. `Listeners` keeps callbacks in registration order and
//! hands back a `Subscription` whose drop removes the callback again, so a
//! consumer that goes away can never be written through.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Callback invoked with a reference to each emitted event.
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

type Cancel = Box<dyn FnOnce() + Send + Sync>;

/// Scoped registration handle. Dropping it (or calling [`Subscription::cancel`])
/// releases the registration exactly once.
#[must_use = "dropping a Subscription cancels it immediately"]
pub struct Subscription {
    cancel: Option<Cancel>,
}

impl Subscription {
    /// Wrap a cancellation closure.
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// A subscription with nothing to release.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Release the registration now.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.cancel.is_some()).finish()
    }
}

struct Entry<T> {
    id: u64,
    listener: Listener<T>,
}

/// Ordered set of listeners shared between an emitter and its subscriptions.
pub struct Listeners<T> {
    entries: Arc<Mutex<Vec<Entry<T>>>>,
    next_id: Arc<AtomicU64>,
}

impl<T> Clone for Listeners<T> {
    fn clone(&self) -> Self {
        Self { entries: Arc::clone(&self.entries), next_id: Arc::clone(&self.next_id) }
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self { entries: Arc::new(Mutex::new(Vec::new())), next_id: Arc::new(AtomicU64::new(1)) }
    }
}

impl<T: 'static> Listeners<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` at the end of the notification order.
    pub fn add(&self, listener: Listener<T>) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().push(Entry { id, listener });

        let entries = Arc::downgrade(&self.entries);
        Subscription::new(move || {
            if let Some(entries) = entries.upgrade() {
                entries
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .retain(|entry| entry.id != id);
            }
        })
    }

    /// Current listeners in registration order.
    ///
    /// Callers invoke the snapshot without holding the registry lock, so a
    /// listener may subscribe or unsubscribe from inside its own callback.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Listener<T>> {
        self.lock().iter().map(|entry| Arc::clone(&entry.listener)).collect()
    }

    /// Synchronously invoke every registered listener with `event`.
    pub fn notify(&self, event: &T) {
        for listener in self.snapshot() {
            listener(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Entry<T>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
