use std::sync::Arc;

use futures::executor::block_on;

use super::*;

fn provider() -> RestIdentityProvider {
    let config = ConsoleConfig {
        admin_email: "admin@example.com".to_owned(),
        identity_api_key: "test-key".to_owned(),
        identity_base_url: "https://identity.example.test/v1/".to_owned(),
        ..ConsoleConfig::default()
    };
    RestIdentityProvider::new(&config)
}

// =============================================================
// endpoints
// =============================================================

#[test]
fn endpoint_trims_trailing_slash_and_appends_key() {
    let provider = provider();
    assert_eq!(
        provider.endpoint(ProviderOp::SignIn),
        "https://identity.example.test/v1/accounts:signInWithPassword?key=test-key"
    );
    assert_eq!(
        provider.endpoint(ProviderOp::PasswordReset),
        "https://identity.example.test/v1/accounts:sendOobCode?key=test-key"
    );
}

// =============================================================
// classify_error
// =============================================================

#[test]
fn email_not_found_depends_on_operation() {
    assert_eq!(classify_error(ProviderOp::SignIn, "EMAIL_NOT_FOUND"), AuthError::InvalidCredentials);
    assert_eq!(classify_error(ProviderOp::PasswordReset, "EMAIL_NOT_FOUND"), AuthError::UnknownEmail);
}

#[test]
fn weak_password_code_ignores_detail_suffix() {
    let message = "WEAK_PASSWORD : Password should be at least 6 characters";
    assert_eq!(classify_error(ProviderOp::SignUp, message), AuthError::WeakPassword);
}

#[test]
fn known_codes_map_to_taxonomy() {
    assert_eq!(classify_error(ProviderOp::SignUp, "EMAIL_EXISTS"), AuthError::EmailInUse);
    assert_eq!(classify_error(ProviderOp::SignIn, "INVALID_LOGIN_CREDENTIALS"), AuthError::InvalidCredentials);
    assert_eq!(classify_error(ProviderOp::SignIn, "INVALID_PASSWORD"), AuthError::InvalidCredentials);
    assert_eq!(classify_error(ProviderOp::Update, "CREDENTIAL_TOO_OLD_LOGIN_AGAIN"), AuthError::InvalidCredentials);
}

#[test]
fn unknown_codes_become_provider_failures() {
    assert_eq!(
        classify_error(ProviderOp::SignIn, "TOO_MANY_ATTEMPTS_TRY_LATER : Access disabled"),
        AuthError::provider("TOO_MANY_ATTEMPTS_TRY_LATER")
    );
    assert_eq!(classify_error(ProviderOp::Lookup, ""), AuthError::provider("lookup failed"));
}

// =============================================================
// lifecycle outside the browser
// =============================================================

#[test]
fn start_without_stored_session_reports_signed_out() {
    let provider = provider();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = provider.subscribe(Arc::new(move |identity: &Option<Identity>| {
        sink.lock().unwrap().push(identity.clone());
    }));

    block_on(provider.start());
    block_on(provider.start());

    assert_eq!(*seen.lock().unwrap(), vec![None]);
}

#[test]
fn requests_fail_outside_browser() {
    let provider = provider();
    let err = block_on(provider.sign_in_with_password("admin@example.com", "pw")).unwrap_err();
    assert_eq!(err, AuthError::provider("not available on server"));
    assert_eq!(provider.current_identity(), None);
}

#[test]
fn profile_updates_require_a_session() {
    let provider = provider();
    let err = block_on(provider.update_display_name("Alex")).unwrap_err();
    assert_eq!(err, AuthError::provider("no signed-in account"));
}

#[test]
fn sign_out_without_session_is_ok() {
    let provider = provider();
    block_on(provider.start());
    assert!(block_on(provider.sign_out()).is_ok());
    assert_eq!(provider.current_identity(), None);
}
