//! Console header: language selector and the signed-in user's menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth::AuthClient;
use crate::state::auth::Session;
use crate::util::guard::{PROFILE_PATH, SIGN_IN_PATH};
use crate::util::i18n::{self, Locale, t};

/// Sign out through the console client, then leave for the sign-in page.
pub(crate) fn sign_out<F>(client: RwSignal<Option<AuthClient>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let Some(client) = client.get_untracked() else {
        return;
    };
    leptos::task::spawn_local(async move {
        match client.sign_out().await {
            Ok(()) => navigate(SIGN_IN_PATH, NavigateOptions { replace: true, ..Default::default() }),
            Err(e) => log::error!("sign-out failed: {e}"),
        }
    });
}

#[component]
pub fn TopNav() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let client = expect_context::<RwSignal<Option<AuthClient>>>();
    let locale = expect_context::<RwSignal<Locale>>();
    let navigate = use_navigate();

    let lang_open = RwSignal::new(false);
    let user_open = RwSignal::new(false);

    let user_label = move || {
        session
            .with(|s| s.identity.as_ref().map(|identity| identity.label().to_owned()))
            .unwrap_or_else(|| t(locale.get(), "console.user").to_owned())
    };
    let user_email = move || session.with(|s| s.email().unwrap_or_default().to_owned());

    let languages = Locale::ALL
        .into_iter()
        .map(|option| {
            let choose = move |_| {
                locale.set(option);
                i18n::save_preference(option);
                lang_open.set(false);
            };
            view! {
                <button
                    class="top-nav__menu-item"
                    class:top-nav__menu-item--active=move || locale.get() == option
                    on:click=choose
                >
                    {move || t(locale.get(), option.label_key())}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let on_sign_out = move |_| {
        user_open.set(false);
        sign_out(client, navigate.clone());
    };

    view! {
        <header class="top-nav">
            <div class="top-nav__dropdown">
                <button class="top-nav__button" on:click=move |_| lang_open.update(|open| *open = !*open)>
                    <span aria-hidden="true">"\u{1F310}"</span>
                    <span>{move || t(locale.get(), locale.get().label_key())}</span>
                    <span aria-hidden="true">"\u{25BE}"</span>
                </button>
                <Show when=move || lang_open.get()>
                    <div class="top-nav__backdrop" on:click=move |_| lang_open.set(false)></div>
                </Show>
                <div class="top-nav__menu" class:top-nav__menu--open=move || lang_open.get()>
                    {languages}
                </div>
            </div>

            <div class="top-nav__dropdown">
                <button class="top-nav__button" on:click=move |_| user_open.update(|open| *open = !*open)>
                    <span class="top-nav__avatar" aria-hidden="true">
                        {move || crate::pages::profile::avatar_initial(&user_label())}
                    </span>
                    <span class="top-nav__user">{user_label}</span>
                    <span aria-hidden="true">"\u{25BE}"</span>
                </button>
                <Show when=move || user_open.get()>
                    <div class="top-nav__backdrop" on:click=move |_| user_open.set(false)></div>
                    <div class="top-nav__menu top-nav__menu--open top-nav__menu--wide">
                        <div class="top-nav__identity">
                            <p class="top-nav__caption">{move || t(locale.get(), "console.signedInAs")}</p>
                            <p class="top-nav__email">{user_email}</p>
                        </div>
                        <div class="top-nav__divider"></div>
                        <a href=PROFILE_PATH class="top-nav__menu-item" on:click=move |_| user_open.set(false)>
                            {move || t(locale.get(), "console.profile")}
                        </a>
                        <button class="top-nav__menu-item" on:click=on_sign_out.clone()>
                            {move || t(locale.get(), "console.signOut")}
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
