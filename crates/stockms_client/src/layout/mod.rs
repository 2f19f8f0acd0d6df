//! Application shell: top bar, sidebar and routed content.

mod sidebar;
mod top_bar;

pub use sidebar::Sidebar;
pub use top_bar::TopBar;

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::auth::use_auth;
use crate::config::use_config;
use crate::pages::MainContent;

/// Layout context - shared state owned by the shell.
#[derive(Clone, Copy)]
pub struct LayoutContext {
    /// Whether the mobile sidebar overlay is open.
    pub sidebar_open: RwSignal<bool>,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(false),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>().expect("LayoutContext not provided")
}

/// Root layout component.
#[component]
pub fn AppLayout() -> impl IntoView {
    let config = use_config();
    let auth = use_auth();

    let layout_ctx = LayoutContext::new();
    provide_context(layout_ctx);
    let sidebar_open = layout_ctx.sidebar_open;

    // The overlay has no place on a wide viewport
    let is_wide = use_media_query(config.wide_query.to_string());
    Effect::new(move |_| {
        if is_wide.get() && sidebar_open.get_untracked() {
            log::debug!("Viewport is wide, closing mobile sidebar");
            sidebar_open.set(false);
        }
    });

    let close_sidebar = Callback::new(move |_: ()| sidebar_open.set(false));

    view! {
        <div class="h-screen flex bg-gray-50 dark:bg-dark-900 overflow-hidden">
            <Sidebar is_open=sidebar_open on_close=close_sidebar user=auth.user />

            <div class="flex-1 flex flex-col min-w-0 overflow-hidden">
                <TopBar/>
                <MainContent/>
            </div>
        </div>
    }
}
