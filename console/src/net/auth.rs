//! Admin authentication flows run from the console forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `AuthClient`; it instructs the identity provider and applies the
//! authorization policy. It never touches the `AuthStore`: the store changes
//! only when the provider reports the resulting state transition.
//!
//! ERROR HANDLING
//! ==============
//! Each provider call races the configured request timeout. A provider login
//! that succeeds for a non-administrator is immediately signed out again and
//! reported as `UnauthorizedEmail`, so such a session never persists.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use crate::error::AuthError;
use crate::net::identity::SharedIdentityProvider;
use crate::net::types::Identity;
use crate::util::guard::AuthorizationPolicy;
use crate::util::timeout::with_timeout;

#[derive(Clone)]
pub struct AuthClient {
    provider: SharedIdentityProvider,
    policy: AuthorizationPolicy,
    request_timeout: Duration,
}

impl AuthClient {
    #[must_use]
    pub fn new(provider: SharedIdentityProvider, policy: AuthorizationPolicy, request_timeout: Duration) -> Self {
        Self { provider, policy, request_timeout }
    }

    #[must_use]
    pub fn provider(&self) -> &SharedIdentityProvider {
        &self.provider
    }

    #[must_use]
    pub fn policy(&self) -> &AuthorizationPolicy {
        &self.policy
    }

    /// Sign in and enforce the administrator policy.
    ///
    /// # Errors
    ///
    /// Provider errors, or [`AuthError::UnauthorizedEmail`] after a forced
    /// sign-out when the authenticated account is not the administrator.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let identity = with_timeout(self.provider.sign_in_with_password(email, password), self.request_timeout).await?;
        if self.policy.permits_email(&identity.email) {
            log::info!("admin signed in");
            return Ok(identity);
        }

        log::warn!("rejected console sign-in for non-admin account {}", identity.id);
        if let Err(e) = with_timeout(self.provider.sign_out(), self.request_timeout).await {
            log::error!("forced sign-out after policy rejection failed: {e}");
        }
        Err(AuthError::UnauthorizedEmail)
    }

    /// Register the administrator account. Other addresses are rejected
    /// before the provider is contacted.
    ///
    /// # Errors
    ///
    /// [`AuthError::UnauthorizedEmail`] or provider sign-up errors.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        if !self.policy.permits_email(email) {
            return Err(AuthError::UnauthorizedEmail);
        }
        with_timeout(self.provider.sign_up_with_password(email, password), self.request_timeout).await
    }

    /// # Errors
    ///
    /// [`AuthError::UnknownEmail`] or provider failures.
    pub async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        with_timeout(self.provider.send_password_reset(email), self.request_timeout).await
    }

    /// Idempotent: signing out while signed out succeeds.
    ///
    /// # Errors
    ///
    /// Provider failures only.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        with_timeout(self.provider.sign_out(), self.request_timeout).await
    }

    /// # Errors
    ///
    /// Provider failures, including a missing session.
    pub async fn update_display_name(&self, display_name: &str) -> Result<Identity, AuthError> {
        with_timeout(self.provider.update_display_name(display_name.trim()), self.request_timeout).await
    }

    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] for a wrong current password,
    /// [`AuthError::WeakPassword`], or provider failures.
    pub async fn change_password(&self, current: &str, new: &str) -> Result<(), AuthError> {
        with_timeout(self.provider.change_password(current, new), self.request_timeout).await
    }
}
