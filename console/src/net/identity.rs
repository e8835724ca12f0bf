//! Identity provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console never talks to the remote authentication service directly:
//! pages run flows from `net::auth`, which call an `IdentityProvider`, and the
//! provider reports resulting state changes to subscribers (the `AuthStore`).
//!
//! DESIGN
//! ======
//! Futures are `?Send` because browser HTTP futures are bound to the JS event
//! loop; the provider object itself is `Send + Sync` so it can sit in Leptos
//! context. `IdentityCell` carries the shared notification rules every
//! adapter must follow.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::AuthError;
use crate::net::types::Identity;
use crate::util::listeners::{Listener, Listeners, Subscription};

/// Callback receiving the provider's current identity (or `None`).
pub type IdentityListener = Listener<Option<Identity>>;

/// Shared handle to whichever adapter the console runs with.
pub type SharedIdentityProvider = Arc<dyn IdentityProvider>;

/// Remote authentication service contract consumed by the console.
#[async_trait::async_trait(?Send)]
pub trait IdentityProvider: Send + Sync {
    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] for unknown accounts or wrong passwords.
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    /// Create an account and sign it in.
    ///
    /// # Errors
    ///
    /// [`AuthError::EmailInUse`] or [`AuthError::WeakPassword`].
    async fn sign_up_with_password(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    /// End the current session. Succeeds when nobody is signed in.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Send a password-reset message to `email`.
    ///
    /// # Errors
    ///
    /// [`AuthError::UnknownEmail`] when no account exists.
    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError>;

    /// Set the signed-in account's display name.
    async fn update_display_name(&self, display_name: &str) -> Result<Identity, AuthError>;

    /// Reauthenticate with `current` and replace the password with `new`.
    async fn change_password(&self, current: &str, new: &str) -> Result<(), AuthError>;

    /// Identity as last reported to subscribers.
    fn current_identity(&self) -> Option<Identity>;

    /// Register for state changes. Once the provider has initialized, the
    /// listener is called immediately with the current identity.
    fn subscribe(&self, listener: IdentityListener) -> Subscription;
}

struct CellState {
    current: Option<Identity>,
    initialized: bool,
}

/// Current identity plus subscribers, with the adapter notification rules:
/// one initial notification once state is known, then exactly one per actual
/// transition.
pub(crate) struct IdentityCell {
    state: Mutex<CellState>,
    listeners: Listeners<Option<Identity>>,
}

impl IdentityCell {
    pub(crate) fn new() -> Self {
        Self { state: Mutex::new(CellState { current: None, initialized: false }), listeners: Listeners::new() }
    }

    pub(crate) fn current(&self) -> Option<Identity> {
        self.lock().current.clone()
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.lock().initialized
    }

    pub(crate) fn subscribe(&self, listener: IdentityListener) -> Subscription {
        let subscription = self.listeners.add(Arc::clone(&listener));
        let initial = {
            let state = self.lock();
            state.initialized.then(|| state.current.clone())
        };
        if let Some(identity) = initial {
            listener(&identity);
        }
        subscription
    }

    /// Report the restored state. Only the first call notifies.
    pub(crate) fn initialize(&self, identity: Option<Identity>) {
        {
            let mut state = self.lock();
            if state.initialized {
                return;
            }
            state.initialized = true;
            state.current.clone_from(&identity);
        }
        self.listeners.notify(&identity);
    }

    /// Record a new identity, notifying only when it differs from the current one.
    pub(crate) fn transition(&self, identity: Option<Identity>) {
        {
            let mut state = self.lock();
            if state.initialized && state.current == identity {
                return;
            }
            state.initialized = true;
            state.current.clone_from(&identity);
        }
        self.listeners.notify(&identity);
    }

    fn lock(&self) -> MutexGuard<'_, CellState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
