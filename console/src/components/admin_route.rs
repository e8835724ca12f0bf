//! Guard wrapper for every `/admin` page except sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session signal mirrored from the `AuthStore`. While the session
//! is pending only a spinner renders. Once decided, an authorized session
//! renders the children and a denied one is replaced by the sign-in page with
//! the requested location in `?from=`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::ConsoleConfig;
use crate::state::auth::Session;
use crate::util::guard::{GuardDecision, RouteGuard, sign_in_redirect};
use crate::util::i18n::{Locale, t};

#[component]
pub fn AdminRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<RwSignal<ConsoleConfig>>();
    let locale = expect_context::<RwSignal<Locale>>();
    let navigate = use_navigate();
    let location = use_location();

    let guard = Memo::new(move |prev: Option<&RouteGuard>| {
        let mut guard = prev.copied().unwrap_or_default();
        let policy = config.with(ConsoleConfig::policy);
        session.with(|s| guard.observe(s, &policy));
        guard
    });
    let decision = move || guard.get().decision();

    Effect::new(move || {
        if decision() != GuardDecision::Denied {
            return;
        }
        let path = location.pathname.get_untracked();
        let search = location.search.get_untracked();
        let search = search.trim_start_matches('?');
        let requested = if search.is_empty() { path } else { format!("{path}?{search}") };
        navigate(&sign_in_redirect(&requested), NavigateOptions { replace: true, ..Default::default() });
    });

    view! {
        <Show
            when=move || decision() == GuardDecision::Authorized
            fallback=move || {
                view! {
                    <div class="admin-route__pending">
                        <div class="spinner" aria-label=move || t(locale.get(), "common.loading")></div>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
