//! Route guarding for the protected `/admin` tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AdminRoute` feeds every session change through a `RouteGuard` and either
//! waits, renders its children, or redirects to the sign-in page carrying the
//! requested location. The sign-in page consumes that location again once the
//! administrator is authorized.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::Session;

/// Public sign-in entry point.
pub const SIGN_IN_PATH: &str = "/admin/auth";
/// Root of the protected tree.
pub const CONSOLE_ROOT_PATH: &str = "/admin";
/// Landing page after sign-in when no return-to location is known.
pub const CONSOLE_HOME_PATH: &str = "/admin/console";
/// Profile editor for the signed-in administrator.
pub const PROFILE_PATH: &str = "/admin/profile";
/// Query parameter carrying the originally requested location.
pub const RETURN_TO_PARAM: &str = "from";

/// Decides whether an authenticated identity may use the console: the
/// session email must equal the one configured administrator address.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationPolicy {
    allowed_email: String,
}

impl AuthorizationPolicy {
    #[must_use]
    pub fn new(allowed_email: impl Into<String>) -> Self {
        Self { allowed_email: allowed_email.into() }
    }

    #[must_use]
    pub fn allowed_email(&self) -> &str {
        &self.allowed_email
    }

    /// An unset allowed address permits nobody.
    #[must_use]
    pub fn permits_email(&self, email: &str) -> bool {
        !self.allowed_email.is_empty() && email == self.allowed_email
    }

    #[must_use]
    pub fn permits(&self, session: &Session) -> bool {
        session.email().is_some_and(|email| self.permits_email(email))
    }
}

/// Outcome of evaluating a session against the policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardDecision {
    /// Provider has not reported yet; no authorization decision is made.
    #[default]
    Pending,
    Authorized,
    Denied,
}

/// Pure decision for one session snapshot. The policy is only consulted once
/// loading is complete.
#[must_use]
pub fn evaluate(session: &Session, policy: &AuthorizationPolicy) -> GuardDecision {
    if !session.loading_complete {
        GuardDecision::Pending
    } else if policy.permits(session) {
        GuardDecision::Authorized
    } else {
        GuardDecision::Denied
    }
}

/// Per-mount guard state: leaves `Pending` once, then moves only between
/// `Authorized` and `Denied`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteGuard {
    decision: GuardDecision,
}

impl RouteGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn decision(&self) -> GuardDecision {
        self.decision
    }

    /// Re-evaluate with a new session snapshot and return the resulting state.
    pub fn observe(&mut self, session: &Session, policy: &AuthorizationPolicy) -> GuardDecision {
        match evaluate(session, policy) {
            GuardDecision::Pending => {}
            decided => {
                if decided != self.decision {
                    log::debug!("route guard: {:?} -> {decided:?}", self.decision);
                }
                self.decision = decided;
            }
        }
        self.decision
    }
}

/// Same-origin `/admin` locations other than the sign-in page itself.
fn is_safe_return_path(path: &str) -> bool {
    let Some(rest) = path.strip_prefix(CONSOLE_ROOT_PATH) else {
        return false;
    };
    let inside_tree = rest.is_empty() || rest.starts_with('/') || rest.starts_with('?');
    let is_sign_in = path
        .strip_prefix(SIGN_IN_PATH)
        .is_some_and(|tail| tail.is_empty() || tail.starts_with('/') || tail.starts_with('?'));
    inside_tree && !is_sign_in && !path.contains("//") && !path.contains('\\')
}

/// Sign-in location for an unauthorized visit to `requested_path`.
#[must_use]
pub fn sign_in_redirect(requested_path: &str) -> String {
    if is_safe_return_path(requested_path) {
        format!("{SIGN_IN_PATH}?{RETURN_TO_PARAM}={}", urlencoding::encode(requested_path))
    } else {
        SIGN_IN_PATH.to_owned()
    }
}

/// Post-login target recovered from the `from` query value.
///
/// `from` is the value as the router hands it over, already percent-decoded
/// once; it is not decoded again.
#[must_use]
pub fn return_to(from: Option<&str>) -> String {
    from.filter(|path| is_safe_return_path(path))
        .map_or_else(|| CONSOLE_HOME_PATH.to_owned(), str::to_owned)
}
