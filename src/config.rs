//! Host configuration parsed from environment variables.
//!
//! The host owns deployment settings and hands the browser-facing subset to
//! the console through `/api/console/config`. Secrets never leave through that
//! endpoint except the identity API key, which is a public web key by nature.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use console::config::{
    ConsoleConfig, DEFAULT_AUTH_TIMEOUT_MS, DEFAULT_IDENTITY_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS,
};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    Missing { var: &'static str },
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub console: ConsoleConfig,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Required:
    /// - `ADMIN_EMAIL`: the one administrator allowed into the console
    /// - `IDENTITY_API_KEY`: web API key for the identity service
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `IDENTITY_BASE_URL`: default Identity Toolkit v1 URL
    /// - `AUTH_STATE_TIMEOUT_MS`: default 10000
    /// - `AUTH_REQUEST_TIMEOUT_MS`: default 15000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or blank,
    /// or when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`HostConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &'static str| {
            lookup(var)
                .map(|raw| raw.trim().to_owned())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing { var })
        };

        let admin_email = required("ADMIN_EMAIL")?;
        let identity_api_key = required("IDENTITY_API_KEY")?;
        let identity_base_url = lookup("IDENTITY_BASE_URL")
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_IDENTITY_BASE_URL.to_owned());

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let auth_timeout_ms = parse_or(&lookup, "AUTH_STATE_TIMEOUT_MS", DEFAULT_AUTH_TIMEOUT_MS)?;
        let request_timeout_ms = parse_or(&lookup, "AUTH_REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?;

        Ok(Self {
            port,
            console: ConsoleConfig { admin_email, identity_api_key, identity_base_url, auth_timeout_ms, request_timeout_ms },
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
