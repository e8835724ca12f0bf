//! Deployment configuration delivered by the host at `/api/console/config`.
//!
//! The host owns the environment (`ADMIN_EMAIL`, identity service key and
//! URL, timeouts); the browser fetches this payload once at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::util::guard::AuthorizationPolicy;

pub const CONFIG_ENDPOINT: &str = "/api/console/config";
pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_AUTH_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 15_000;

/// Marketplace branding used when no marketplace document is available.
pub const DEFAULT_MARKETPLACE_NAME: &str = "Marketplace";
pub const DEFAULT_MARKETPLACE_LOGO: &str = "/placeholder-logo.png";

fn default_identity_base_url() -> String {
    DEFAULT_IDENTITY_BASE_URL.to_owned()
}

fn default_auth_timeout_ms() -> u64 {
    DEFAULT_AUTH_TIMEOUT_MS
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// The one identity the authorization policy accepts.
    pub admin_email: String,
    pub identity_api_key: String,
    #[serde(default = "default_identity_base_url")]
    pub identity_base_url: String,
    /// How long the session may stay pending before the console gives up.
    #[serde(default = "default_auth_timeout_ms")]
    pub auth_timeout_ms: u64,
    /// Deadline for each identity-provider request.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            admin_email: String::new(),
            identity_api_key: String::new(),
            identity_base_url: default_identity_base_url(),
            auth_timeout_ms: DEFAULT_AUTH_TIMEOUT_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl ConsoleConfig {
    #[must_use]
    pub fn policy(&self) -> AuthorizationPolicy {
        AuthorizationPolicy::new(self.admin_email.clone())
    }

    #[must_use]
    pub fn auth_timeout(&self) -> Duration {
        Duration::from_millis(self.auth_timeout_ms)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
