//! Collapsible console sidebar built from the static navigation table.
//!
//! Groups expand independently; collapsing the sidebar leaves only icons with
//! the labels moved into tooltips.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::top_nav::sign_out;
use crate::config::{DEFAULT_MARKETPLACE_LOGO, DEFAULT_MARKETPLACE_NAME};
use crate::net::auth::AuthClient;
use crate::state::nav::NavigationState;
use crate::util::i18n::{Locale, t};
use crate::util::nav_tree::{NAVIGATION, NavItem, NavSection, icon_for};

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavigationState>>();
    let client = expect_context::<RwSignal<Option<AuthClient>>>();
    let locale = expect_context::<RwSignal<Locale>>();
    let navigate = use_navigate();

    let collapsed = move || nav.with(|n| n.sidebar_collapsed);

    let sections = NAVIGATION
        .iter()
        .map(|section| {
            let items = section.items.iter().map(|item| nav_item(section, item)).collect::<Vec<_>>();
            let title_key = section.label_key();
            let title = move || t(locale.get(), &title_key).to_owned();
            view! {
                <li class="sidebar__section">
                    <div class="sidebar__section-title">
                        <span class="sidebar__icon" aria-hidden="true">{section.icon}</span>
                        <Show when=move || !collapsed()>
                            <span>{title.clone()}</span>
                        </Show>
                    </div>
                    <ul class="sidebar__items">{items}</ul>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let on_sign_out = move |_| sign_out(client, navigate.clone());

    view! {
        <aside class="sidebar" class:sidebar--collapsed=collapsed>
            <div class="sidebar__header">
                <Show when=move || !collapsed()>
                    <img class="sidebar__logo" src=DEFAULT_MARKETPLACE_LOGO alt=DEFAULT_MARKETPLACE_NAME />
                </Show>
                <button
                    class="sidebar__toggle"
                    title=move || t(locale.get(), "console.toggleSidebar")
                    on:click=move |_| nav.update(NavigationState::toggle_sidebar)
                >
                    "\u{2630}"
                </button>
            </div>
            <nav class="sidebar__nav">
                <ul class="sidebar__sections">{sections}</ul>
                <button class="sidebar__link sidebar__sign-out" on:click=on_sign_out>
                    <span class="sidebar__icon" aria-hidden="true">"\u{21A9}"</span>
                    <Show when=move || !collapsed()>
                        <span>{move || t(locale.get(), "console.signOut")}</span>
                    </Show>
                </button>
            </nav>
        </aside>
    }
}

/// One sidebar entry: a link, or a group toggle with its children.
fn nav_item(section: &'static NavSection, item: &'static NavItem) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavigationState>>();
    let locale = expect_context::<RwSignal<Locale>>();
    let navigate = use_navigate();

    let collapsed = move || nav.with(|n| n.sidebar_collapsed);
    let label_key = item.label_key(section);
    let label = move || t(locale.get(), &label_key).to_owned();
    let tooltip = {
        let label = label.clone();
        move || collapsed().then(&label)
    };

    if !item.is_group() {
        let href = item.href;
        return view! {
            <li>
                <button
                    class="sidebar__link"
                    title=tooltip
                    on:click=move |_| navigate(href, NavigateOptions::default())
                >
                    <span class="sidebar__icon" aria-hidden="true">{icon_for(item.name)}</span>
                    <Show when=move || !collapsed()>
                        <span>{label.clone()}</span>
                    </Show>
                </button>
            </li>
        }
        .into_any();
    }

    let name = item.name;
    let expanded = move || nav.with(|n| n.is_expanded(name));
    let children = item
        .children
        .iter()
        .map(|child| {
            let key = child.label_key(section, item);
            let child_label = move || t(locale.get(), &key).to_owned();
            let child_tooltip = {
                let child_label = child_label.clone();
                move || collapsed().then(&child_label)
            };
            let href = child.href;
            let navigate = navigate.clone();
            view! {
                <li>
                    <button
                        class="sidebar__link sidebar__link--child"
                        title=child_tooltip
                        on:click=move |_| navigate(href, NavigateOptions::default())
                    >
                        <span class="sidebar__icon" aria-hidden="true">{icon_for(child.name)}</span>
                        <Show when=move || !collapsed()>
                            <span>{child_label.clone()}</span>
                        </Show>
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <li>
            <button
                class="sidebar__link sidebar__group"
                class:sidebar__group--open=expanded
                title=tooltip
                on:click=move |_| nav.update(|n| n.toggle_group(name))
            >
                <span class="sidebar__icon" aria-hidden="true">{icon_for(item.name)}</span>
                <Show when=move || !collapsed()>
                    <span>{label.clone()}</span>
                    <span class="sidebar__chevron" class:sidebar__chevron--open=expanded aria-hidden="true">
                        "\u{203A}"
                    </span>
                </Show>
            </button>
            <ul class="sidebar__children" class:sidebar__children--open=expanded>
                {children}
            </ul>
        </li>
    }
    .into_any()
}
