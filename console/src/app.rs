//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the single `AuthStore` and mirrors its session into a signal for
//! the views. In the browser it boots the identity provider: fetch the host
//! configuration, attach the store to a REST provider, arm the pending
//! timeout, and restore any stored session.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::config::ConsoleConfig;
use crate::net::auth::AuthClient;
use crate::pages::{
    auth::AdminAuthPage,
    console::{ConsoleHome, ConsoleLayout, ConsoleSection},
    profile::ProfilePage,
};
use crate::state::{auth::AuthStore, auth::Session, nav::NavigationState, notify::NotifyState};
use crate::util::guard::CONSOLE_ROOT_PATH;
use crate::util::i18n::{self, Locale};
use crate::util::listeners::Subscription;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = AuthStore::new();
    let session = RwSignal::new(store.session());
    let mirror = store.subscribe(move |s: &Session| {
        let _ = session.try_set(s.clone());
    });
    let attachment = StoredValue::new(None::<Subscription>);
    on_cleanup(move || {
        mirror.cancel();
        let _ = attachment.try_update_value(Option::take);
    });

    let config = RwSignal::new(ConsoleConfig::default());
    let client = RwSignal::new(None::<AuthClient>);
    let locale = RwSignal::new(Locale::default());

    provide_context(store.clone());
    provide_context(session);
    provide_context(config);
    provide_context(client);
    provide_context(locale);
    provide_context(RwSignal::new(NavigationState::default()));
    provide_context(RwSignal::new(NotifyState::default()));

    // Stored language is applied after hydration so the first client render
    // matches the server's.
    Effect::new(move || locale.set(i18n::read_preference()));

    #[cfg(feature = "hydrate")]
    boot(store, config, client, attachment);
    #[cfg(not(feature = "hydrate"))]
    let _ = store;

    view! {
        <Stylesheet id="leptos" href="/pkg/konectame-admin.css"/>
        <Title text="Konectame Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=CONSOLE_ROOT_PATH/> }/>
                <Route path=(StaticSegment("admin"), StaticSegment("auth")) view=AdminAuthPage/>
                <ParentRoute path=StaticSegment("admin") view=ConsoleLayout>
                    <Route path=StaticSegment("") view=ConsoleHome/>
                    <Route path=StaticSegment("console") view=ConsoleHome/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=WildcardSegment("section") view=ConsoleSection/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Connect the store to the identity service described by the host config.
///
/// A config failure completes loading immediately as timed out; the provider
/// is never contacted and the sign-in page reports it as unavailable.
#[cfg(feature = "hydrate")]
fn boot(
    store: AuthStore,
    config: RwSignal<ConsoleConfig>,
    client: RwSignal<Option<AuthClient>>,
    attachment: StoredValue<Option<Subscription>>,
) {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::config::DEFAULT_REQUEST_TIMEOUT_MS;
    use crate::net::api::fetch_console_config;
    use crate::net::identity_rest::RestIdentityProvider;
    use crate::util::timeout::{sleep, with_timeout};

    leptos::task::spawn_local(async move {
        let fetched = with_timeout(fetch_console_config(), Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS)).await;
        let cfg = match fetched {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("console config unavailable: {e}");
                store.expire_pending();
                return;
            }
        };
        if cfg.admin_email.is_empty() {
            log::warn!("console config has no admin email; every sign-in will be rejected");
        }

        let provider = Arc::new(RestIdentityProvider::new(&cfg));
        let _ = config.try_set(cfg.clone());
        let _ = client.try_set(Some(AuthClient::new(provider.clone(), cfg.policy(), cfg.request_timeout())));
        let subscription = store.attach(provider.as_ref());
        let _ = attachment.try_update_value(|slot| *slot = Some(subscription));

        let pending = store.clone();
        let auth_timeout = cfg.auth_timeout();
        leptos::task::spawn_local(async move {
            sleep(auth_timeout).await;
            pending.expire_pending();
        });

        provider.start().await;
    });
}
