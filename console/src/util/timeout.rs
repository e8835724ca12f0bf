//! Deadlines for identity-provider calls.
//!
//! The remote service has no timeout of its own, so every provider call made
//! by the console races a timer. Expiry surfaces as a provider failure.

#[cfg(test)]
#[path = "timeout_test.rs"]
mod timeout_test;

use std::future::Future;
use std::time::Duration;

use futures::future::{Either, select};

use crate::error::AuthError;

/// Resolve after `duration` on the browser event loop.
///
/// Outside the browser there is no timer source and the future never
/// resolves, so deadlines built on it never fire.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
        futures::future::pending::<()>().await;
    }
}

/// Run `fut` until it completes or `deadline` resolves, whichever is first.
///
/// # Errors
///
/// Returns the future's own error, or [`AuthError::NetworkOrProviderFailure`]
/// when the deadline wins.
pub async fn with_deadline<T, F, D>(fut: F, deadline: D) -> Result<T, AuthError>
where
    F: Future<Output = Result<T, AuthError>>,
    D: Future<Output = ()>,
{
    let fut = std::pin::pin!(fut);
    let deadline = std::pin::pin!(deadline);
    match select(fut, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(AuthError::provider("request timed out")),
    }
}

/// [`with_deadline`] against a [`sleep`] of `timeout`.
///
/// # Errors
///
/// Same as [`with_deadline`].
pub async fn with_timeout<T, F>(fut: F, timeout: Duration) -> Result<T, AuthError>
where
    F: Future<Output = Result<T, AuthError>>,
{
    with_deadline(fut, sleep(timeout)).await
}
