//! Authentication error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every failure an auth form can hit collapses into one `AuthError` variant,
//! and every variant maps to exactly one localized message key. Forms catch
//! errors at submit time and show that single string; nothing propagates to a
//! global handler and nothing is retried automatically.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failures surfaced by the identity provider or the authorization policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("email address already registered")]
    EmailInUse,
    #[error("password too weak")]
    WeakPassword,
    /// The provider accepted the credentials but the account is not the
    /// configured administrator.
    #[error("account is not authorized for the admin console")]
    UnauthorizedEmail,
    #[error("no account exists for this email")]
    UnknownEmail,
    #[error("identity provider failure: {0}")]
    NetworkOrProviderFailure(String),
}

impl AuthError {
    /// Message-table key used to render this error for the user.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "auth.invalidCredentials",
            Self::EmailInUse => "auth.emailInUse",
            Self::WeakPassword => "auth.weakPassword",
            Self::UnauthorizedEmail => "auth.notAuthorized",
            Self::UnknownEmail => "auth.unknownEmail",
            Self::NetworkOrProviderFailure(_) => "auth.providerFailure",
        }
    }

    pub(crate) fn provider(detail: impl Into<String>) -> Self {
        Self::NetworkOrProviderFailure(detail.into())
    }
}
