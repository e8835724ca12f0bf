//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthStore` is the single owner of the console `Session`. It is created once
//! in `App`, shared through Leptos context, and fed only by identity-provider
//! notifications (plus the pending timeout). Route guards and user-aware
//! components read clones of the session; nobody writes its fields directly.
//!
//! DESIGN
//! ======
//! Notifications are queued and applied one at a time in arrival order. A
//! notification that arrives while listeners are still running (re-entrantly
//! or from another thread) waits in the queue until the current delivery
//! finishes, so listeners never observe two mutations interleaved.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::net::identity::IdentityProvider;
use crate::net::types::Identity;
use crate::util::listeners::{Listeners, Subscription};

/// Current authenticated identity and its load status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub identity: Option<Identity>,
    /// False until the provider reports real state for the first time.
    pub loading_complete: bool,
    /// Loading was completed by the pending timeout rather than the provider.
    pub timed_out: bool,
}

impl Session {
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.identity.as_ref().map(|identity| identity.email.as_str())
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }
}

enum Event {
    Provider(Option<Identity>),
    PendingExpired,
}

#[derive(Default)]
struct Inner {
    session: Session,
    queue: VecDeque<Event>,
    delivering: bool,
}

impl Inner {
    /// Apply one event; returns whether the session changed observably.
    fn reduce(&mut self, event: Event) -> bool {
        match event {
            Event::Provider(identity) => {
                self.session.identity = identity;
                self.session.loading_complete = true;
                self.session.timed_out = false;
                true
            }
            Event::PendingExpired => {
                if self.session.loading_complete {
                    return false;
                }
                self.session.identity = None;
                self.session.loading_complete = true;
                self.session.timed_out = true;
                true
            }
        }
    }
}

/// Process-wide reactive cell holding the console session.
#[derive(Clone, Default)]
pub struct AuthStore {
    inner: Arc<Mutex<Inner>>,
    listeners: Listeners<Session>,
}

impl AuthStore {
    /// A store in the initial pending state (`loading_complete == false`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn session(&self) -> Session {
        self.lock().session.clone()
    }

    /// Register a listener called after every session mutation, in
    /// registration order. Dropping the returned guard unregisters it.
    pub fn subscribe(&self, listener: impl Fn(&Session) + Send + Sync + 'static) -> Subscription {
        self.listeners.add(Arc::new(listener))
    }

    /// Subscribe the store to `provider` state changes.
    ///
    /// The provider subscription lives exactly as long as the returned guard.
    pub fn attach(&self, provider: &dyn IdentityProvider) -> Subscription {
        let store = self.clone();
        provider.subscribe(Arc::new(move |identity: &Option<Identity>| {
            store.apply(Event::Provider(identity.clone()));
        }))
    }

    /// Complete loading with no identity if the provider has not reported yet.
    pub fn expire_pending(&self) {
        self.apply(Event::PendingExpired);
    }

    fn apply(&self, event: Event) {
        {
            let mut inner = self.lock();
            inner.queue.push_back(event);
            if inner.delivering {
                return;
            }
            inner.delivering = true;
        }

        let _delivery = Delivery(self);
        loop {
            let snapshot = {
                let mut inner = self.lock();
                let Some(event) = inner.queue.pop_front() else {
                    inner.delivering = false;
                    return;
                };
                if !inner.reduce(event) {
                    continue;
                }
                inner.session.clone()
            };

            log::debug!(
                "auth session updated: signed_in={} timed_out={}",
                snapshot.is_signed_in(),
                snapshot.timed_out
            );
            self.listeners.notify(&snapshot);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases the delivery flag when a listener unwinds, so events queued
/// behind the failed delivery drain on the next notification.
struct Delivery<'a>(&'a AuthStore);

impl Drop for Delivery<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.0.lock().delivering = false;
        }
    }
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("session", &self.session())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
