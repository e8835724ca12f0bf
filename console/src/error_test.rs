use super::*;

#[test]
fn unauthorized_email_maps_to_not_authorized_message() {
    assert_eq!(AuthError::UnauthorizedEmail.message_key(), "auth.notAuthorized");
}

#[test]
fn provider_failures_share_one_message_key() {
    let a = AuthError::provider("timeout");
    let b = AuthError::provider("HTTP 503");
    assert_eq!(a.message_key(), b.message_key());
    assert_ne!(a, b);
}

#[test]
fn display_includes_provider_detail() {
    let err = AuthError::provider("request timed out");
    assert_eq!(err.to_string(), "identity provider failure: request timed out");
}

#[test]
fn every_variant_has_a_translated_message() {
    let variants = [
        AuthError::InvalidCredentials,
        AuthError::EmailInUse,
        AuthError::WeakPassword,
        AuthError::UnauthorizedEmail,
        AuthError::UnknownEmail,
        AuthError::provider("x"),
    ];
    for variant in variants {
        let key = variant.message_key();
        for locale in [crate::util::i18n::Locale::Es, crate::util::i18n::Locale::En] {
            assert_ne!(crate::util::i18n::t(locale, key), key, "missing {key} for {locale:?}");
        }
    }
}
