//! Administrator sign-in page with registration and password recovery.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route `/admin/auth`. Forms call `AuthClient`; the page itself never
//! writes session state. Leaving the page is driven by the session: once the
//! guard would authorize it, the page replaces itself with the `?from=`
//! location (or the console home).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::{ConsoleConfig, DEFAULT_MARKETPLACE_LOGO, DEFAULT_MARKETPLACE_NAME};
use crate::net::auth::AuthClient;
use crate::pages::password_recovery::PasswordRecovery;
use crate::state::auth::Session;
use crate::util::guard::{GuardDecision, RETURN_TO_PARAM, evaluate, return_to};
use crate::util::i18n::{Locale, t};

/// Which form the page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    Register,
    Recover,
}

impl AuthMode {
    fn title_key(self) -> &'static str {
        match self {
            Self::SignIn => "auth.login",
            Self::Register => "auth.register",
            Self::Recover => "auth.recoverPassword",
        }
    }

    fn submit_key(self) -> &'static str {
        match self {
            Self::SignIn => "auth.signIn",
            Self::Register => "auth.registerAction",
            Self::Recover => "auth.sendResetLink",
        }
    }

    fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::Register,
            Self::Register | Self::Recover => Self::SignIn,
        }
    }
}

/// Minimal shape check: something before and after a single `@`.
pub fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Trim the email and require both fields. Errors are message keys.
pub fn validate_credentials_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if !is_plausible_email(email) {
        return Err("auth.emailRequired");
    }
    if password.is_empty() {
        return Err("auth.passwordRequired");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn AdminAuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<RwSignal<ConsoleConfig>>();
    let client = expect_context::<RwSignal<Option<AuthClient>>>();
    let locale = expect_context::<RwSignal<Locale>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let mode = RwSignal::new(AuthMode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let authorized = session.with(|s| config.with(|c| evaluate(s, &c.policy()))) == GuardDecision::Authorized;
        if authorized {
            let from = query.with_untracked(|q| q.get(RETURN_TO_PARAM));
            navigate(&return_to(from.as_deref()), NavigateOptions { replace: true, ..Default::default() });
        }
    });

    let timed_out = move || session.with(|s| s.timed_out);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_credentials_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(key) => {
                error.set(Some(key));
                return;
            }
        };
        let Some(client) = client.get_untracked() else {
            error.set(Some("auth.providerUnavailable"));
            return;
        };
        let current = mode.get();
        busy.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            let result = match current {
                AuthMode::Register => client.sign_up(&email_value, &password_value).await,
                AuthMode::SignIn | AuthMode::Recover => client.sign_in(&email_value, &password_value).await,
            };
            if let Err(e) = result {
                log::warn!("admin {current:?} failed: {e}");
                let _ = error.try_set(Some(e.message_key()));
            }
            let _ = busy.try_set(false);
        });
    };

    let switch_mode = move |next: AuthMode| {
        mode.set(next);
        error.set(None);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <img class="auth-card__logo" src=DEFAULT_MARKETPLACE_LOGO alt=DEFAULT_MARKETPLACE_NAME />
                <Show when=timed_out>
                    <p class="auth-card__banner">{move || t(locale.get(), "auth.providerUnavailable")}</p>
                </Show>
                <Show
                    when=move || mode.get() != AuthMode::Recover
                    fallback=move || view! { <PasswordRecovery on_back=Callback::new(move |()| switch_mode(AuthMode::SignIn)) /> }
                >
                    <h1 class="auth-card__title">{move || t(locale.get(), mode.get().title_key())}</h1>
                    <p class="auth-card__subtitle">
                        {move || {
                            let key = if mode.get() == AuthMode::SignIn { "auth.noAccount" } else { "auth.haveAccount" };
                            t(locale.get(), key)
                        }}
                        " "
                        <button class="auth-card__link" on:click=move |_| switch_mode(mode.get().toggled())>
                            {move || t(locale.get(), mode.get().toggled().title_key())}
                        </button>
                    </p>
                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__label" for="email">{move || t(locale.get(), "auth.email")}</label>
                        <input
                            id="email"
                            class="auth-form__input"
                            type="email"
                            autocomplete="email"
                            placeholder=move || t(locale.get(), "auth.emailPlaceholder")
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <label class="auth-form__label" for="password">{move || t(locale.get(), "auth.password")}</label>
                        <input
                            id="password"
                            class="auth-form__input"
                            type="password"
                            autocomplete=move || {
                                if mode.get() == AuthMode::Register { "new-password" } else { "current-password" }
                            }
                            placeholder=move || t(locale.get(), "auth.passwordPlaceholder")
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <Show when=move || error.get().is_some()>
                            <p class="auth-form__error" role="alert">
                                {move || error.get().map(|key| t(locale.get(), key))}
                            </p>
                        </Show>
                        <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                            {move || {
                                let key = if busy.get() { "common.loading" } else { mode.get().submit_key() };
                                t(locale.get(), key)
                            }}
                        </button>
                        <Show when=move || mode.get() == AuthMode::SignIn>
                            <button class="auth-card__link" type="button" on:click=move |_| switch_mode(AuthMode::Recover)>
                                {move || t(locale.get(), "auth.recoverPassword")}
                            </button>
                        </Show>
                    </form>
                </Show>
            </div>
        </div>
    }
}
