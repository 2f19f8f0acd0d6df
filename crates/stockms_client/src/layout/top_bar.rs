//! Top bar with the mobile menu toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use stockms_nav::item_for_path;

use super::use_layout;

#[component]
pub fn TopBar() -> impl IntoView {
    let layout = use_layout();
    let location = use_location();
    let title = move || {
        item_for_path(&location.pathname.get())
            .map(|item| item.name)
            .unwrap_or("Not Found")
    };

    view! {
        <header class="h-16 flex items-center gap-3 px-4 bg-white dark:bg-dark-800 border-b border-gray-200 dark:border-dark-700 shrink-0">
            <button
                class="lg:hidden p-2 rounded-md text-gray-500 hover:text-gray-700 dark:hover:text-gray-300 hover:bg-gray-100 dark:hover:bg-dark-700 transition-colors"
                aria-label="Open navigation"
                on:click=move |_| layout.toggle_sidebar()
            >
                "☰"
            </button>
            <h1 class="text-lg font-semibold text-gray-900 dark:text-white truncate">{title}</h1>
        </header>
    }
}
