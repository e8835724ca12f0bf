//! Console shell pages behind the admin guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ConsoleLayout` is the parent route for everything under `/admin` except
//! sign-in. It wraps the sidebar, header and routed content in `AdminRoute`,
//! so no nested page renders before the session is authorized.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::components::admin_route::AdminRoute;
use crate::components::notification::Toast;
use crate::components::sidebar::Sidebar;
use crate::components::top_nav::TopNav;
use crate::config::DEFAULT_MARKETPLACE_NAME;
use crate::util::i18n::{Locale, t};
use crate::util::nav_tree::find_by_href;

#[component]
pub fn ConsoleLayout() -> impl IntoView {
    view! {
        <AdminRoute>
            <div class="console">
                <Sidebar />
                <div class="console__main">
                    <TopNav />
                    <main class="console__content">
                        <Outlet />
                    </main>
                </div>
                <Toast />
            </div>
        </AdminRoute>
    }
}

/// Landing page at `/admin` and `/admin/console`.
#[component]
pub fn ConsoleHome() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    view! {
        <section class="console-home">
            <p class="console-home__marketplace">{DEFAULT_MARKETPLACE_NAME}</p>
            <h1 class="console-home__title">{move || t(locale.get(), "console.home.title")}</h1>
            <p class="console-home__subtitle">{move || t(locale.get(), "console.home.subtitle")}</p>
        </section>
    }
}

/// Any other `/admin/...` location: titled from the navigation table.
#[component]
pub fn ConsoleSection() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let location = use_location();

    let title_key = Memo::new(move |_| location.pathname.with(|path| find_by_href(path)));
    let known = move || title_key.with(Option::is_some);
    let title = move || {
        title_key.with(|key| match key {
            Some(key) => t(locale.get(), key).to_owned(),
            None => t(locale.get(), "console.notFound").to_owned(),
        })
    };

    view! {
        <section class="console-section">
            <h1 class="console-section__title">{title}</h1>
            <Show when=known>
                <p class="console-section__empty">{move || t(locale.get(), "console.section.empty")}</p>
            </Show>
        </section>
    }
}
