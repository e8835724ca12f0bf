//! Identity provider backed by the Identity Toolkit REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`; the session token is
//! kept in `localStorage` and restored by [`RestIdentityProvider::start`].
//! Server-side (SSR): requests fail with a provider error since sign-in only
//! happens in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The service reports failures as `{"error":{"message":"CODE : detail"}}`.
//! `classify_error` maps the code onto `AuthError` per operation, because the
//! same code means different things to different forms (`EMAIL_NOT_FOUND` is
//! a bad login on sign-in but an unknown email on password reset).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_rest_test.rs"]
mod identity_rest_test;

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ConsoleConfig;
use crate::error::AuthError;
use crate::net::identity::{IdentityCell, IdentityListener, IdentityProvider};
use crate::net::types::{
    AuthResponse, Identity, LookupRequest, LookupResponse, OobCodeRequest, PasswordRequest, UpdateRequest,
    UpdateResponse,
};
use crate::util::listeners::Subscription;
use crate::util::persistence;

const SESSION_STORAGE_KEY: &str = "konectame_admin_session";

/// Which call produced a service error; drives [`classify_error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ProviderOp {
    SignIn,
    SignUp,
    PasswordReset,
    Update,
    Lookup,
}

impl ProviderOp {
    fn method(self) -> &'static str {
        match self {
            Self::SignIn => "signInWithPassword",
            Self::SignUp => "signUp",
            Self::PasswordReset => "sendOobCode",
            Self::Update => "update",
            Self::Lookup => "lookup",
        }
    }
}

/// Map a service error message onto the console error taxonomy.
pub(crate) fn classify_error(op: ProviderOp, message: &str) -> AuthError {
    let code = message.split(':').next().unwrap_or_default().trim();
    match code {
        "EMAIL_NOT_FOUND" | "INVALID_EMAIL" if op == ProviderOp::PasswordReset => AuthError::UnknownEmail,
        "EMAIL_NOT_FOUND"
        | "INVALID_EMAIL"
        | "INVALID_PASSWORD"
        | "INVALID_LOGIN_CREDENTIALS"
        | "USER_DISABLED"
        | "USER_NOT_FOUND"
        | "INVALID_ID_TOKEN"
        | "TOKEN_EXPIRED"
        | "CREDENTIAL_TOO_OLD_LOGIN_AGAIN" => AuthError::InvalidCredentials,
        "EMAIL_EXISTS" => AuthError::EmailInUse,
        "WEAK_PASSWORD" => AuthError::WeakPassword,
        "" => AuthError::provider(format!("{} failed", op.method())),
        other => AuthError::provider(other.to_owned()),
    }
}

/// Token material persisted between page loads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct StoredSession {
    id_token: String,
    refresh_token: String,
    identity: Identity,
}

pub struct RestIdentityProvider {
    api_key: String,
    base_url: String,
    session: Mutex<Option<StoredSession>>,
    cell: IdentityCell,
}

impl RestIdentityProvider {
    #[must_use]
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            api_key: config.identity_api_key.clone(),
            base_url: config.identity_base_url.trim_end_matches('/').to_owned(),
            session: Mutex::new(None),
            cell: IdentityCell::new(),
        }
    }

    fn endpoint(&self, op: ProviderOp) -> String {
        format!("{}/accounts:{}?key={}", self.base_url, op.method(), self.api_key)
    }

    /// Restore the persisted session, verify it with the service, and deliver
    /// the first state notification to subscribers.
    pub async fn start(&self) {
        if self.cell.is_initialized() {
            return;
        }
        let Some(stored) = persistence::load_json::<StoredSession>(SESSION_STORAGE_KEY) else {
            self.cell.initialize(None);
            return;
        };

        match self.lookup(&stored.id_token).await {
            Ok(identity) => {
                let restored = StoredSession { identity: identity.clone(), ..stored };
                self.remember(Some(restored));
                self.cell.initialize(Some(identity));
            }
            Err(e) => {
                log::info!("stored admin session discarded: {e}");
                self.remember(None);
                self.cell.initialize(None);
            }
        }
    }

    async fn lookup(&self, id_token: &str) -> Result<Identity, AuthError> {
        let resp: LookupResponse = self.post(ProviderOp::Lookup, &LookupRequest { id_token }).await?;
        resp.users
            .into_iter()
            .next()
            .map(Identity::from)
            .ok_or(AuthError::InvalidCredentials)
    }

    async fn password_auth(&self, op: ProviderOp, email: &str, password: &str) -> Result<StoredSession, AuthError> {
        let body = PasswordRequest { email, password, return_secure_token: true };
        let resp: AuthResponse = self.post(op, &body).await?;
        Ok(StoredSession { identity: Identity::from(&resp), id_token: resp.id_token, refresh_token: resp.refresh_token })
    }

    fn establish(&self, session: StoredSession) -> Identity {
        let identity = session.identity.clone();
        self.remember(Some(session));
        self.cell.transition(Some(identity.clone()));
        identity
    }

    fn remember(&self, session: Option<StoredSession>) {
        match &session {
            Some(stored) => persistence::save_json(SESSION_STORAGE_KEY, stored),
            None => persistence::remove(SESSION_STORAGE_KEY),
        }
        *self.lock() = session;
    }

    fn active_session(&self) -> Result<StoredSession, AuthError> {
        self.lock().clone().ok_or_else(|| AuthError::provider("no signed-in account"))
    }

    fn apply_update(&self, previous: StoredSession, resp: &UpdateResponse) -> Identity {
        let rotated = StoredSession {
            identity: Identity::from(resp),
            id_token: resp.id_token.clone().unwrap_or(previous.id_token),
            refresh_token: resp.refresh_token.clone().unwrap_or(previous.refresh_token),
        };
        self.establish(rotated)
    }

    fn lock(&self) -> MutexGuard<'_, Option<StoredSession>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn post<B, R>(&self, op: ProviderOp, body: &B) -> Result<R, AuthError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(op))
                .json(body)
                .map_err(|e| AuthError::provider(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::provider(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                return Err(match resp.json::<crate::net::types::ErrorEnvelope>().await {
                    Ok(envelope) => classify_error(op, &envelope.error.message),
                    Err(_) => AuthError::provider(format!("{} failed: {status}", op.method())),
                });
            }
            resp.json::<R>().await.map_err(|e| AuthError::provider(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.endpoint(op), body);
            Err(AuthError::provider("not available on server"))
        }
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for RestIdentityProvider {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let session = self.password_auth(ProviderOp::SignIn, email, password).await?;
        Ok(self.establish(session))
    }

    async fn sign_up_with_password(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let session = self.password_auth(ProviderOp::SignUp, email, password).await?;
        Ok(self.establish(session))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.remember(None);
        self.cell.transition(None);
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let body = OobCodeRequest { request_type: "PASSWORD_RESET", email };
        let _: serde_json::Value = self.post(ProviderOp::PasswordReset, &body).await?;
        Ok(())
    }

    async fn update_display_name(&self, display_name: &str) -> Result<Identity, AuthError> {
        let session = self.active_session()?;
        let body = UpdateRequest {
            id_token: &session.id_token,
            display_name: Some(display_name),
            return_secure_token: true,
            ..UpdateRequest::default()
        };
        let resp: UpdateResponse = self.post(ProviderOp::Update, &body).await?;
        Ok(self.apply_update(session, &resp))
    }

    async fn change_password(&self, current: &str, new: &str) -> Result<(), AuthError> {
        let email = self.active_session()?.identity.email;
        let reauthenticated = self.password_auth(ProviderOp::SignIn, &email, current).await?;
        self.remember(Some(reauthenticated.clone()));

        let body = UpdateRequest {
            id_token: &reauthenticated.id_token,
            password: Some(new),
            return_secure_token: true,
            ..UpdateRequest::default()
        };
        let resp: UpdateResponse = self.post(ProviderOp::Update, &body).await?;
        self.apply_update(reauthenticated, &resp);
        Ok(())
    }

    fn current_identity(&self) -> Option<Identity> {
        self.cell.current()
    }

    fn subscribe(&self, listener: IdentityListener) -> Subscription {
        self.cell.subscribe(listener)
    }
}
