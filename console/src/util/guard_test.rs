use super::*;
use crate::net::types::Identity;

const ADMIN: &str = "alexander.ramirez@konectame.com";

fn policy() -> AuthorizationPolicy {
    AuthorizationPolicy::new(ADMIN)
}

fn session(email: Option<&str>, loading_complete: bool) -> Session {
    Session {
        identity: email.map(|email| Identity { id: "u1".to_owned(), email: email.to_owned(), display_name: None }),
        loading_complete,
        timed_out: false,
    }
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn pending_session_is_never_decided() {
    assert_eq!(evaluate(&session(None, false), &policy()), GuardDecision::Pending);
    assert_eq!(evaluate(&session(Some(ADMIN), false), &policy()), GuardDecision::Pending);
}

#[test]
fn admin_session_is_authorized() {
    assert_eq!(evaluate(&session(Some(ADMIN), true), &policy()), GuardDecision::Authorized);
}

#[test]
fn other_email_is_denied() {
    assert_eq!(evaluate(&session(Some("other@example.com"), true), &policy()), GuardDecision::Denied);
}

#[test]
fn signed_out_session_is_denied() {
    assert_eq!(evaluate(&session(None, true), &policy()), GuardDecision::Denied);
}

#[test]
fn policy_comparison_is_literal() {
    assert!(!policy().permits_email("Alexander.Ramirez@konectame.com"));
    assert!(!policy().permits_email(" alexander.ramirez@konectame.com"));
}

// =============================================================
// RouteGuard transitions
// =============================================================

#[test]
fn guard_starts_pending() {
    assert_eq!(RouteGuard::new().decision(), GuardDecision::Pending);
}

#[test]
fn guard_never_returns_to_pending() {
    let mut guard = RouteGuard::new();
    assert_eq!(guard.observe(&session(Some(ADMIN), true), &policy()), GuardDecision::Authorized);
    assert_eq!(guard.observe(&session(None, false), &policy()), GuardDecision::Authorized);
}

#[test]
fn guard_moves_between_authorized_and_denied() {
    let mut guard = RouteGuard::new();
    assert_eq!(guard.observe(&session(None, false), &policy()), GuardDecision::Pending);
    assert_eq!(guard.observe(&session(Some(ADMIN), true), &policy()), GuardDecision::Authorized);
    assert_eq!(guard.observe(&session(None, true), &policy()), GuardDecision::Denied);
    assert_eq!(guard.observe(&session(Some(ADMIN), true), &policy()), GuardDecision::Authorized);
}

// =============================================================
// redirect contract
// =============================================================

#[test]
fn unauthenticated_visit_to_admin_redirects_to_sign_in() {
    let mut guard = RouteGuard::new();
    assert_eq!(guard.observe(&session(None, true), &policy()), GuardDecision::Denied);

    let target = sign_in_redirect("/admin");
    assert_eq!(target, "/admin/auth?from=%2Fadmin");
    assert!(target.starts_with(SIGN_IN_PATH));
}

#[test]
fn redirect_preserves_nested_location() {
    assert_eq!(
        sign_in_redirect("/admin/config/general/email"),
        "/admin/auth?from=%2Fadmin%2Fconfig%2Fgeneral%2Femail"
    );
}

#[test]
fn redirect_drops_unsafe_locations() {
    assert_eq!(sign_in_redirect("/admin/auth"), SIGN_IN_PATH);
    assert_eq!(sign_in_redirect("//evil.example.com/admin"), SIGN_IN_PATH);
    assert_eq!(sign_in_redirect("/administrator"), SIGN_IN_PATH);
}

/// The `from` value as the router exposes it: decoded exactly once.
fn from_param(location: &str) -> Option<String> {
    let (_, raw) = location.split_once(&format!("{RETURN_TO_PARAM}="))?;
    urlencoding::decode(raw).ok().map(std::borrow::Cow::into_owned)
}

#[test]
fn return_to_round_trips_redirect_location() {
    for requested in ["/admin/profile", "/admin/manage/users", "/admin/search?q=50%25", "/admin/notes/100%"] {
        let from = from_param(&sign_in_redirect(requested));
        assert_eq!(return_to(from.as_deref()), requested);
    }
}

#[test]
fn return_to_does_not_decode_again() {
    assert_eq!(return_to(Some("/admin/search?q=50%25")), "/admin/search?q=50%25");
    assert_eq!(return_to(Some("%2Fadmin%2Fprofile")), CONSOLE_HOME_PATH);
}

#[test]
fn return_to_defaults_to_console_home() {
    assert_eq!(return_to(None), CONSOLE_HOME_PATH);
    assert_eq!(return_to(Some("https://evil.example.com")), CONSOLE_HOME_PATH);
    assert_eq!(return_to(Some("/admin/auth")), CONSOLE_HOME_PATH);
    assert_eq!(return_to(Some("/admin/auth?from=%2Fadmin")), CONSOLE_HOME_PATH);
    assert_eq!(return_to(Some("/admin//evil")), CONSOLE_HOME_PATH);
}
