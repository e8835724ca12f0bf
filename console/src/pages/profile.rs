//! Profile editor for the signed-in administrator.
//!
//! Two tabs: basic information (display name, email read-only) and password
//! change. Outcomes are reported through toasts; validation failures stay
//! inline and never reach the identity provider.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::notification::notify;
use crate::net::auth::AuthClient;
use crate::state::auth::Session;
use crate::state::notify::{NotifyKind, NotifyState};
use crate::util::i18n::{Locale, t};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Basic,
    Password,
}

/// Uppercased first character of `label`, or `?` when empty.
pub fn avatar_initial(label: &str) -> String {
    label
        .trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

/// Trimmed non-empty display name. Errors are message keys.
pub fn validate_display_name(name: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() { Err("profile.nameRequired") } else { Ok(name.to_owned()) }
}

/// Check the change-password form before contacting the provider.
pub fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<(), &'static str> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err("profile.passwordRequired");
    }
    if new != confirm {
        return Err("profile.passwordMismatch");
    }
    Ok(())
}

/// Password input with its own show/hide toggle.
#[component]
fn SecretField(id: &'static str, label_key: &'static str, value: RwSignal<String>) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let visible = RwSignal::new(false);

    view! {
        <label class="profile-form__label" for=id>{move || t(locale.get(), label_key)}</label>
        <div class="profile-form__secret">
            <input
                id=id
                class="profile-form__input"
                type=move || if visible.get() { "text" } else { "password" }
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                class="profile-form__reveal"
                type="button"
                title=move || t(locale.get(), if visible.get() { "profile.hidePassword" } else { "profile.showPassword" })
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "\u{25C9}" } else { "\u{25CE}" }}
            </button>
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let client = expect_context::<RwSignal<Option<AuthClient>>>();
    let locale = expect_context::<RwSignal<Locale>>();
    let notifications = expect_context::<RwSignal<NotifyState>>();

    let tab = RwSignal::new(ProfileTab::Basic);
    let display_name = RwSignal::new(
        session.with_untracked(|s| s.identity.as_ref().and_then(|i| i.display_name.clone()).unwrap_or_default()),
    );
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let email = move || session.with(|s| s.email().unwrap_or_default().to_owned());

    let select_tab = move |next: ProfileTab| {
        tab.set(next);
        error.set(None);
    };

    let on_save_basic = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name = match validate_display_name(&display_name.get()) {
            Ok(name) => name,
            Err(key) => {
                error.set(Some(key));
                return;
            }
        };
        let Some(client) = client.get_untracked() else {
            return;
        };
        busy.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            let lang = locale.get_untracked();
            match client.update_display_name(&name).await {
                Ok(_) => notify(notifications, NotifyKind::Success, t(lang, "profile.updateSuccess")),
                Err(e) => {
                    log::error!("profile update failed: {e}");
                    notify(notifications, NotifyKind::Error, t(lang, "profile.updateError"));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    let on_save_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (current, new) = (current_password.get(), new_password.get());
        if let Err(key) = validate_password_change(&current, &new, &confirm_password.get()) {
            error.set(Some(key));
            return;
        }
        let Some(client) = client.get_untracked() else {
            return;
        };
        busy.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            let lang = locale.get_untracked();
            match client.change_password(&current, &new).await {
                Ok(()) => {
                    notify(notifications, NotifyKind::Success, t(lang, "profile.passwordUpdateSuccess"));
                    let _ = current_password.try_set(String::new());
                    let _ = new_password.try_set(String::new());
                    let _ = confirm_password.try_set(String::new());
                }
                Err(e) => {
                    log::error!("password change failed: {e}");
                    let message = format!("{} {}", t(lang, "profile.passwordUpdateError"), t(lang, e.message_key()));
                    notify(notifications, NotifyKind::Error, message);
                }
            }
            let _ = busy.try_set(false);
        });
    };

    let save_label = move || t(locale.get(), if busy.get() { "common.saving" } else { "common.save" });

    view! {
        <section class="profile-page">
            <header class="profile-page__header">
                <div class="profile-page__avatar" aria-hidden="true">
                    {move || {
                        session.with(|s| s.identity.as_ref().map(|i| avatar_initial(i.label())).unwrap_or_default())
                    }}
                </div>
                <div>
                    <h1 class="profile-page__title">{move || t(locale.get(), "profile.title")}</h1>
                    <p class="profile-page__subtitle">{move || t(locale.get(), "profile.subtitle")}</p>
                </div>
            </header>

            <nav class="profile-page__tabs">
                <button
                    class="profile-page__tab"
                    class:profile-page__tab--active=move || tab.get() == ProfileTab::Basic
                    on:click=move |_| select_tab(ProfileTab::Basic)
                >
                    {move || t(locale.get(), "profile.basicInfo")}
                </button>
                <button
                    class="profile-page__tab"
                    class:profile-page__tab--active=move || tab.get() == ProfileTab::Password
                    on:click=move |_| select_tab(ProfileTab::Password)
                >
                    {move || t(locale.get(), "profile.changePassword")}
                </button>
            </nav>

            <Show when=move || error.get().is_some()>
                <p class="profile-form__error" role="alert">{move || error.get().map(|key| t(locale.get(), key))}</p>
            </Show>

            <Show
                when=move || tab.get() == ProfileTab::Basic
                fallback=move || {
                    view! {
                        <form class="profile-form" on:submit=on_save_password>
                            <SecretField id="current-password" label_key="profile.currentPassword" value=current_password />
                            <SecretField id="new-password" label_key="profile.newPassword" value=new_password />
                            <SecretField id="confirm-password" label_key="profile.confirmPassword" value=confirm_password />
                            <button class="profile-form__submit" type="submit" disabled=move || busy.get()>
                                {move || t(locale.get(), if busy.get() { "common.saving" } else { "profile.updatePassword" })}
                            </button>
                        </form>
                    }
                }
            >
                <form class="profile-form" on:submit=on_save_basic>
                    <label class="profile-form__label" for="display-name">{move || t(locale.get(), "profile.name")}</label>
                    <input
                        id="display-name"
                        class="profile-form__input"
                        type="text"
                        prop:value=move || display_name.get()
                        on:input=move |ev| display_name.set(event_target_value(&ev))
                    />
                    <label class="profile-form__label" for="profile-email">{move || t(locale.get(), "profile.email")}</label>
                    <input id="profile-email" class="profile-form__input" type="email" readonly=true prop:value=email />
                    <button class="profile-form__submit" type="submit" disabled=move || busy.get()>
                        {save_label}
                    </button>
                </form>
            </Show>
        </section>
    }
}
