//! Toast notifications for account actions.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::notify::{NOTIFICATION_TIMEOUT_MS, NotifyKind, NotifyState};
use crate::util::i18n::{Locale, t};
use crate::util::timeout::sleep;

/// Show `message` and schedule its auto-dismiss.
pub fn notify(state: RwSignal<NotifyState>, kind: NotifyKind, message: impl Into<String>) {
    let message = message.into();
    let Some(seq) = state.try_update(|s| s.show(kind, message)) else {
        return;
    };
    leptos::task::spawn_local(async move {
        sleep(Duration::from_millis(NOTIFICATION_TIMEOUT_MS)).await;
        let _ = state.try_update(|s| s.dismiss(seq));
    });
}

/// Top-right toast for the current notification, if any.
#[component]
pub fn Toast() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotifyState>>();
    let locale = expect_context::<RwSignal<Locale>>();

    move || {
        notifications.get().current.map(|n| {
            let seq = n.seq;
            let is_error = n.kind == NotifyKind::Error;
            let is_success = !is_error;
            view! {
                <div class="toast" class:toast--error=is_error class:toast--success=is_success role="status">
                    <span class="toast__icon" aria-hidden="true">
                        {if is_error { "\u{2716}" } else { "\u{2714}" }}
                    </span>
                    <p class="toast__message">{n.message}</p>
                    <button
                        class="toast__close"
                        title=move || t(locale.get(), "common.close")
                        on:click=move |_| notifications.update(|s| s.dismiss(seq))
                    >
                        "\u{00D7}"
                    </button>
                </div>
            }
        })
    }
}
