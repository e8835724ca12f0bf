use super::*;

#[test]
fn avatar_initial_uppercases_first_character() {
    assert_eq!(avatar_initial("alexander"), "A");
    assert_eq!(avatar_initial("  ñandú"), "Ñ");
}

#[test]
fn avatar_initial_of_blank_label_is_placeholder() {
    assert_eq!(avatar_initial("   "), "?");
}

#[test]
fn validate_display_name_trims_and_requires_value() {
    assert_eq!(validate_display_name("  Alexander Ramírez "), Ok("Alexander Ramírez".to_owned()));
    assert_eq!(validate_display_name("   "), Err("profile.nameRequired"));
}

#[test]
fn mismatched_passwords_are_rejected_before_submit() {
    assert_eq!(validate_password_change("old-pw", "new-pw-1", "new-pw-2"), Err("profile.passwordMismatch"));
}

#[test]
fn empty_password_fields_are_rejected() {
    assert_eq!(validate_password_change("", "new-pw", "new-pw"), Err("profile.passwordRequired"));
    assert_eq!(validate_password_change("old-pw", "", ""), Err("profile.passwordRequired"));
}

#[test]
fn matching_passwords_pass_validation() {
    assert_eq!(validate_password_change("old-pw", "new-pw", "new-pw"), Ok(()));
}

#[test]
fn profile_messages_are_translated() {
    let keys = [
        "profile.nameRequired",
        "profile.passwordRequired",
        "profile.passwordMismatch",
        "profile.updateSuccess",
        "profile.updateError",
        "profile.passwordUpdateSuccess",
        "profile.passwordUpdateError",
    ];
    for locale in Locale::ALL {
        for key in keys {
            assert_ne!(t(locale, key), key);
        }
    }
}
