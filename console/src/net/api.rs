//! REST helpers for talking to the console host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the configuration is
//! only fetched by the browser during boot.

#![allow(clippy::unused_async)]

use crate::config::ConsoleConfig;
use crate::error::AuthError;

/// Fetch deployment configuration from `/api/console/config`.
///
/// # Errors
///
/// Returns a provider failure if the request or decoding fails.
pub async fn fetch_console_config() -> Result<ConsoleConfig, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(crate::config::CONFIG_ENDPOINT)
            .send()
            .await
            .map_err(|e| AuthError::provider(e.to_string()))?;
        if !resp.ok() {
            return Err(AuthError::provider(format!("config request failed: {}", resp.status())));
        }
        resp.json::<ConsoleConfig>()
            .await
            .map_err(|e| AuthError::provider(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::provider("not available on server"))
    }
}
