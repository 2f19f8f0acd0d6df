//! Role-aware navigation sidebar.
//!
//! Two variants share the same navigation list and markup: a desktop rail
//! that is always in the tree (CSS hides it below the wide breakpoint), and
//! a mobile overlay that is mounted only while the parent's open flag is set
//! or its exit transition is still running.
//!
//! The sidebar holds no state of its own. Closing is reported through
//! `on_close`, which fires on backdrop click, on the close button, and when
//! a mobile link is followed.

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use stockms_nav::{
    is_active_route, navigation_for, AvatarView, Icon, Motion, NavItem, PresencePhase,
    SidebarVariant, User,
};

use crate::config::use_config;
use crate::hooks::{use_entrance, use_presence};

const PANEL_SURFACE: &str =
    "bg-white dark:bg-dark-800 border-r border-gray-200 dark:border-dark-700";
const LINK_BASE: &str =
    "flex items-center space-x-3 px-4 py-3 rounded-lg transition-all duration-200 group no-underline";
const LINK_ACTIVE: &str = "bg-primary-500 text-white shadow-lg";
const LINK_INACTIVE: &str = "text-secondary-600 dark:text-secondary-300 hover:bg-primary-50 dark:hover:bg-dark-700 hover:text-primary-600 dark:hover:text-primary-400";

/// Navigation sidebar.
///
/// * `is_open` - parent-owned flag for the mobile overlay
/// * `on_close` - asks the parent to clear `is_open`
/// * `user` - signed-in user; `None` renders the chrome with no links and no user card
#[component]
pub fn Sidebar(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] user: Signal<Option<User>>,
) -> impl IntoView {
    let navigation = Memo::new(move |_| {
        let current = user.get();
        let items = navigation_for(current.as_ref());
        log::debug!(
            "Sidebar: {} navigation items for role {:?}",
            items.len(),
            current.as_ref().map(|u| u.role)
        );
        items
    });

    view! {
        <DesktopSidebar is_open=is_open navigation=navigation user=user on_close=on_close />
        <MobileSidebar is_open=is_open navigation=navigation user=user on_close=on_close />
    }
}

#[component]
fn DesktopSidebar(
    is_open: Signal<bool>,
    navigation: Memo<Vec<&'static NavItem>>,
    user: Signal<Option<User>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let variant = SidebarVariant::Desktop;
    let motion = variant.panel_motion();
    let phase = use_entrance();

    view! {
        <Show when=move || variant.is_rendered(is_open.get())>
            <div
                class="hidden lg:block lg:w-64 lg:flex-shrink-0"
                data-sidebar="desktop"
                style=move || motion.style(phase.get())
            >
                <div class=format!("flex flex-col h-full {PANEL_SURFACE}")>
                    <div class="flex items-center flex-shrink-0 px-6 py-6">
                        <Brand interactive=true />
                    </div>
                    <UserCard user=user />
                    <NavList navigation=navigation variant=variant on_close=on_close />
                </div>
            </div>
        </Show>
    }
}

#[component]
fn MobileSidebar(
    is_open: Signal<bool>,
    navigation: Memo<Vec<&'static NavItem>>,
    user: Signal<Option<User>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let variant = SidebarVariant::Mobile;
    let panel = variant.panel_motion();
    let backdrop = Motion::backdrop();

    let visible = Signal::derive(move || variant.is_rendered(is_open.get()));
    let exit_ms = panel.exit_ms().max(backdrop.exit_ms());
    let phase = use_presence(visible, Duration::from_millis(u64::from(exit_ms)));
    let exiting = move || phase.get() == PresencePhase::Exiting;

    view! {
        <Show when=move || phase.get().is_mounted()>
            <div
                class="fixed inset-0 bg-black bg-opacity-50 z-40 lg:hidden"
                data-sidebar="backdrop"
                class:pointer-events-none=exiting
                style=move || backdrop.style(phase.get())
                on:click=move |_| on_close.run(())
            />

            <aside
                class=format!("fixed left-0 top-0 h-full w-64 z-50 {PANEL_SURFACE}")
                data-sidebar="mobile"
                class:pointer-events-none=exiting
                style=move || panel.style(phase.get())
            >
                <div class="flex flex-col h-full">
                    <div class="flex items-center justify-between px-6 py-6">
                        <Brand />
                        {variant.has_close_button().then(|| view! {
                            <button
                                class="p-2 rounded-md text-gray-400 hover:text-gray-600 dark:hover:text-gray-300 hover:bg-gray-100 dark:hover:bg-dark-700 transition-colors"
                                aria-label="Close navigation"
                                data-sidebar="close"
                                on:click=move |_| on_close.run(())
                            >
                                {Icon::Close.glyph()}
                            </button>
                        })}
                    </div>
                    <UserCard user=user />
                    <NavList navigation=navigation variant=variant on_close=on_close />
                </div>
            </aside>
        </Show>
    }
}

/// Logo and product name.
#[component]
fn Brand(#[prop(optional)] interactive: bool) -> impl IntoView {
    let config = use_config();
    let class = if interactive {
        "flex items-center space-x-3 transition-transform duration-200 hover:scale-105"
    } else {
        "flex items-center space-x-3"
    };

    view! {
        <div class=class>
            <div class="w-8 h-8 bg-gradient-to-br from-blue-500 to-blue-600 rounded-lg flex items-center justify-center">
                <span class="text-base leading-none">{Icon::Brand.glyph()}</span>
            </div>
            <span class="text-xl font-bold text-gray-900 dark:text-white">{config.brand}</span>
        </div>
    }
}

/// Avatar, name and role of the signed-in user. Omitted entirely without one.
#[component]
fn UserCard(user: Signal<Option<User>>) -> impl IntoView {
    move || {
        user.get().map(|user| {
            let avatar = match user.avatar_view() {
                AvatarView::Image { src, alt } => view! {
                    <img src=src.to_string() alt=alt.to_string() class="w-8 h-8 rounded-full object-cover" />
                }
                .into_any(),
                AvatarView::Badge => view! {
                    <div class="w-8 h-8 bg-blue-500 rounded-full flex items-center justify-center">
                        <span class="text-sm leading-none text-white">{Icon::Person.glyph()}</span>
                    </div>
                }
                .into_any(),
            };
            let role = user.role_label();

            view! {
                <div class="px-6 pb-4" data-sidebar="user-card">
                    <div class="flex items-center space-x-3 p-3 bg-gray-50 dark:bg-dark-700 rounded-lg">
                        {avatar}
                        <div class="flex-1 min-w-0">
                            <p class="text-sm font-medium text-gray-900 dark:text-white truncate">
                                {user.name}
                            </p>
                            <p class="text-xs text-gray-600 dark:text-gray-400">{role}</p>
                        </div>
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn NavList(
    navigation: Memo<Vec<&'static NavItem>>,
    variant: SidebarVariant,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="flex-1 px-4 pb-4 space-y-1">
            <For
                each=move || navigation.get().into_iter().enumerate()
                key=|(index, item)| (*index, item.name)
                children=move |(index, item): (usize, &'static NavItem)| {
                    view! { <SidebarLink item=item index=index variant=variant on_close=on_close /> }
                }
            />
        </nav>
    }
}

/// Single navigation link. Entries fade in one after another.
#[component]
fn SidebarLink(
    item: &'static NavItem,
    index: usize,
    variant: SidebarVariant,
    on_close: Callback<()>,
) -> impl IntoView {
    let location = use_location();
    let is_active = move || is_active_route(&location.pathname.get(), item.href);
    let motion = Motion::nav_item(index);
    let phase = use_entrance();

    view! {
        <div style=move || motion.style(phase.get())>
            <A
                href=item.href
                on:click=move |_| {
                    if variant.closes_on_navigate() {
                        on_close.run(());
                    }
                }
                attr:class=move || format!(
                    "{LINK_BASE} {}",
                    if is_active() { LINK_ACTIVE } else { LINK_INACTIVE }
                )
            >
                <span class="w-5 h-5 flex items-center justify-center leading-none transition-transform group-hover:scale-110">
                    {item.icon.glyph()}
                </span>
                <span class="font-medium">{item.name}</span>
            </A>
        </div>
    }
}
