//! In-process identity provider with a local account table.
//!
//! Follows the same notification rules as the REST adapter and backs the flow
//! and store tests. Only compiled for tests; nothing is persisted.

#[cfg(test)]
#[path = "identity_memory_test.rs"]
mod identity_memory_test;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::error::AuthError;
use crate::net::identity::{IdentityCell, IdentityListener, IdentityProvider};
use crate::net::types::Identity;
use crate::util::listeners::Subscription;

/// Shortest password accepted by sign-up and password changes.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug)]
struct Account {
    id: String,
    password: String,
    display_name: Option<String>,
}

#[derive(Default)]
struct Table {
    accounts: HashMap<String, Account>,
    reset_requests: Vec<String>,
    offline: bool,
}

pub struct MemoryIdentityProvider {
    table: Mutex<Table>,
    cell: IdentityCell,
}

impl Default for MemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryIdentityProvider {
    /// An empty, not yet started provider. Subscribers hear nothing until
    /// [`MemoryIdentityProvider::start`].
    #[must_use]
    pub fn new() -> Self {
        Self { table: Mutex::new(Table::default()), cell: IdentityCell::new() }
    }

    /// Add an account, returning its identity.
    pub fn add_account(&self, email: &str, password: &str) -> Identity {
        let account = Account { id: Uuid::new_v4().to_string(), password: password.to_owned(), display_name: None };
        let identity = Identity { id: account.id.clone(), email: email.to_owned(), display_name: None };
        self.lock().accounts.insert(email.to_owned(), account);
        identity
    }

    /// Builder form of [`MemoryIdentityProvider::add_account`].
    #[must_use]
    pub fn with_account(self, email: &str, password: &str) -> Self {
        self.add_account(email, password);
        self
    }

    /// Report the initial (signed-out) state to subscribers.
    pub fn start(&self) {
        self.cell.initialize(None);
    }

    /// Simulate an unreachable service: every request fails.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Emails for which a reset message was sent, oldest first.
    #[must_use]
    pub fn reset_requests(&self) -> Vec<String> {
        self.lock().reset_requests.clone()
    }

    /// Drop the current session as if it were ended elsewhere (another tab,
    /// an admin revoking it).
    pub fn revoke_session(&self) {
        self.cell.transition(None);
    }

    fn reachable(&self) -> Result<MutexGuard<'_, Table>, AuthError> {
        let table = self.lock();
        if table.offline {
            return Err(AuthError::provider("identity service unreachable"));
        }
        Ok(table)
    }

    fn lock(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn identity_of(email: &str, account: &Account) -> Identity {
        Identity { id: account.id.clone(), email: email.to_owned(), display_name: account.display_name.clone() }
    }

    fn signed_in_email(&self) -> Result<String, AuthError> {
        self.cell
            .current()
            .map(|identity| identity.email)
            .ok_or_else(|| AuthError::provider("no signed-in account"))
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for MemoryIdentityProvider {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let identity = {
            let table = self.reachable()?;
            let account = table
                .accounts
                .get(email)
                .filter(|account| account.password == password)
                .ok_or(AuthError::InvalidCredentials)?;
            Self::identity_of(email, account)
        };
        self.cell.transition(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_up_with_password(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let identity = {
            let mut table = self.reachable()?;
            if table.accounts.contains_key(email) {
                return Err(AuthError::EmailInUse);
            }
            if password.chars().count() < MIN_PASSWORD_LEN {
                return Err(AuthError::WeakPassword);
            }
            let account = Account { id: Uuid::new_v4().to_string(), password: password.to_owned(), display_name: None };
            let identity = Self::identity_of(email, &account);
            table.accounts.insert(email.to_owned(), account);
            identity
        };
        self.cell.transition(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.cell.transition(None);
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let mut table = self.reachable()?;
        if !table.accounts.contains_key(email) {
            return Err(AuthError::UnknownEmail);
        }
        table.reset_requests.push(email.to_owned());
        Ok(())
    }

    async fn update_display_name(&self, display_name: &str) -> Result<Identity, AuthError> {
        let email = self.signed_in_email()?;
        let identity = {
            let mut table = self.reachable()?;
            let account = table.accounts.get_mut(&email).ok_or(AuthError::InvalidCredentials)?;
            account.display_name = Some(display_name.to_owned()).filter(|name| !name.trim().is_empty());
            Self::identity_of(&email, account)
        };
        self.cell.transition(Some(identity.clone()));
        Ok(identity)
    }

    async fn change_password(&self, current: &str, new: &str) -> Result<(), AuthError> {
        let email = self.signed_in_email()?;
        let mut table = self.reachable()?;
        let account = table
            .accounts
            .get_mut(&email)
            .filter(|account| account.password == current)
            .ok_or(AuthError::InvalidCredentials)?;
        if new.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }
        new.clone_into(&mut account.password);
        Ok(())
    }

    fn current_identity(&self) -> Option<Identity> {
        self.cell.current()
    }

    fn subscribe(&self, listener: IdentityListener) -> Subscription {
        self.cell.subscribe(listener)
    }
}
