//! Password recovery form shown inside the sign-in page.

#[cfg(test)]
#[path = "password_recovery_test.rs"]
mod password_recovery_test;

use leptos::prelude::*;

use crate::net::auth::AuthClient;
use crate::pages::auth::is_plausible_email;
use crate::util::i18n::{Locale, t};

/// Trimmed email for a reset request. Errors are message keys.
pub fn validate_recovery_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if is_plausible_email(email) { Ok(email.to_owned()) } else { Err("auth.emailRequired") }
}

#[component]
pub fn PasswordRecovery(on_back: Callback<()>) -> impl IntoView {
    let client = expect_context::<RwSignal<Option<AuthClient>>>();
    let locale = expect_context::<RwSignal<Locale>>();

    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let sent = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        sent.set(false);
        let email_value = match validate_recovery_email(&email.get()) {
            Ok(value) => value,
            Err(key) => {
                error.set(Some(key));
                return;
            }
        };
        let Some(client) = client.get_untracked() else {
            error.set(Some("auth.providerUnavailable"));
            return;
        };
        busy.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            match client.reset_password(&email_value).await {
                Ok(()) => {
                    let _ = sent.try_set(true);
                }
                Err(e) => {
                    log::warn!("password reset failed: {e}");
                    let _ = error.try_set(Some(e.message_key()));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <h1 class="auth-card__title">{move || t(locale.get(), "auth.recoverPassword")}</h1>
        <p class="auth-card__subtitle">{move || t(locale.get(), "auth.recoverInstructions")}</p>
        <form class="auth-form" on:submit=on_submit>
            <label class="auth-form__label" for="recovery-email">{move || t(locale.get(), "auth.email")}</label>
            <input
                id="recovery-email"
                class="auth-form__input"
                type="email"
                autocomplete="email"
                placeholder=move || t(locale.get(), "auth.emailPlaceholder")
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <p class="auth-form__error" role="alert">{move || error.get().map(|key| t(locale.get(), key))}</p>
            </Show>
            <Show when=move || sent.get()>
                <p class="auth-form__success" role="status">{move || t(locale.get(), "auth.resetEmailSent")}</p>
            </Show>
            <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                {move || t(locale.get(), if busy.get() { "common.loading" } else { "auth.sendResetLink" })}
            </button>
            <button class="auth-card__link" type="button" on:click=move |_| on_back.run(())>
                {move || t(locale.get(), "auth.backToLogin")}
            </button>
        </form>
    }
}
