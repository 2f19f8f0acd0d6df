//! Application pages (routes).
//!
//! Page content lives with the feature teams; each route renders a
//! placeholder named after its catalog entry.

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;
use stockms_nav::{item_for_path, paths};

use crate::auth::use_auth;

/// Main content area with route definitions.
#[component]
pub fn MainContent() -> impl IntoView {
    view! {
        <main class="flex-1 overflow-y-auto p-6">
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=|| view! { <RoutePlaceholder href=paths::DASHBOARD /> } />
                <Route path=path!("/products") view=|| view! { <RoutePlaceholder href=paths::PRODUCTS /> } />
                <Route path=path!("/categories") view=|| view! { <RoutePlaceholder href=paths::CATEGORIES /> } />
                <Route path=path!("/suppliers") view=|| view! { <RoutePlaceholder href=paths::SUPPLIERS /> } />
                <Route path=path!("/orders") view=|| view! { <RoutePlaceholder href=paths::ORDERS /> } />
                <Route path=path!("/reports") view=|| view! { <RoutePlaceholder href=paths::REPORTS /> } />
                <Route path=path!("/users") view=|| view! { <RoutePlaceholder href=paths::USERS /> } />
                <Route path=path!("/settings") view=|| view! { <RoutePlaceholder href=paths::SETTINGS /> } />
                <Route path=path!("/profile") view=|| view! { <RoutePlaceholder href=paths::PROFILE /> } />
            </Routes>
        </main>
    }
}

/// Title card for a catalog route, gated on the same roles as its link.
#[component]
fn RoutePlaceholder(href: &'static str) -> impl IntoView {
    let auth = use_auth();
    let item = item_for_path(href);
    let allowed = move || {
        let role = auth.user.get().map(|u| u.role);
        matches!((item, role), (Some(item), Some(role)) if item.allows(role))
    };
    let title = item.map(|item| item.name).unwrap_or(href);

    view! {
        <section class="max-w-3xl">
            <h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-2">{title}</h2>
            <Show
                when=allowed
                fallback=|| view! {
                    <p class="text-sm text-gray-600 dark:text-gray-400">
                        "You do not have access to this page."
                    </p>
                }
            >
                <p class="text-sm text-gray-600 dark:text-gray-400">"Nothing here yet."</p>
            </Show>
        </section>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="max-w-3xl">
            <h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-2">"Not Found"</h2>
            <p class="text-sm text-gray-600 dark:text-gray-400">"No page lives at this address."</p>
        </section>
    }
}
