//! Sidebar component tests. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos_router::components::Router;
use stockms_client::auth::{provide_auth_context, use_auth};
use stockms_client::config::AppConfig;
use stockms_client::Sidebar;
use stockms_nav::{Role, User};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Mounted sidebar plus the handles a test drives it with.
struct Harness {
    container: HtmlElement,
    is_open: RwSignal<bool>,
    user: RwSignal<Option<User>>,
    close_calls: RwSignal<u32>,
}

impl Harness {
    fn mount(is_open: bool, user: Option<User>) -> Self {
        let container = fresh_container();
        let is_open = RwSignal::new(is_open);
        let close_calls = RwSignal::new(0_u32);
        let user = RwSignal::new(user);
        let on_close = Callback::new(move |_: ()| close_calls.update(|n| *n += 1));

        mount_to(container.clone(), move || {
            view! {
                <Router>
                    <Sidebar is_open=is_open on_close=on_close user=user />
                </Router>
            }
        })
        .forget();

        Self {
            container,
            is_open,
            user,
            close_calls,
        }
    }

    fn find(&self, selector: &str) -> Option<Element> {
        self.container.query_selector(selector).ok().flatten()
    }

    fn count(&self, selector: &str) -> u32 {
        self.container
            .query_selector_all(selector)
            .map(|nodes| nodes.length())
            .unwrap_or(0)
    }

    fn click(&self, selector: &str) {
        self.find(selector)
            .unwrap_or_else(|| panic!("no element for {selector}"))
            .unchecked_into::<HtmlElement>()
            .click();
    }
}

fn fresh_container() -> HtmlElement {
    let document = document();
    let container = document
        .create_element("div")
        .unwrap()
        .unchecked_into::<HtmlElement>();
    document.body().unwrap().append_child(&container).unwrap();
    container
}

/// Let effects, frames and short timers run.
async fn settle(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

fn admin() -> User {
    User::new("Jane Doe", Role::Admin)
}

#[wasm_bindgen_test]
async fn desktop_panel_present_while_closed() {
    let sidebar = Harness::mount(false, Some(admin()));
    settle(50).await;

    assert!(sidebar.find("[data-sidebar=desktop]").is_some());
    assert!(sidebar.find("[data-sidebar=mobile]").is_none());
    assert!(sidebar.find("[data-sidebar=backdrop]").is_none());
    assert_eq!(sidebar.count("[data-sidebar=desktop] nav a"), 9);
}

#[wasm_bindgen_test]
async fn mobile_panel_follows_open_flag() {
    let sidebar = Harness::mount(false, Some(admin()));
    settle(50).await;
    assert!(sidebar.find("[data-sidebar=mobile]").is_none());

    sidebar.is_open.set(true);
    settle(50).await;
    assert!(sidebar.find("[data-sidebar=mobile]").is_some());
    assert!(sidebar.find("[data-sidebar=desktop]").is_some());

    sidebar.is_open.set(false);
    // Exit transition runs before unmount
    settle(1_000).await;
    assert!(sidebar.find("[data-sidebar=mobile]").is_none());
    assert_eq!(sidebar.close_calls.get_untracked(), 0);
}

#[wasm_bindgen_test]
async fn backdrop_click_closes_once() {
    let sidebar = Harness::mount(true, Some(admin()));
    settle(50).await;

    sidebar.click("[data-sidebar=backdrop]");
    assert_eq!(sidebar.close_calls.get_untracked(), 1);
}

#[wasm_bindgen_test]
async fn close_button_closes_once() {
    let sidebar = Harness::mount(true, Some(admin()));
    settle(50).await;

    sidebar.click("[data-sidebar=close]");
    assert_eq!(sidebar.close_calls.get_untracked(), 1);
}

#[wasm_bindgen_test]
async fn mobile_link_closes_once() {
    let sidebar = Harness::mount(true, Some(User::new("Sam", Role::Cashier)));
    settle(50).await;

    assert_eq!(sidebar.count("[data-sidebar=mobile] nav a"), 3);
    sidebar.click("[data-sidebar=mobile] nav a[href='/orders']");
    assert_eq!(sidebar.close_calls.get_untracked(), 1);
}

#[wasm_bindgen_test]
async fn desktop_link_does_not_close() {
    let sidebar = Harness::mount(false, Some(admin()));
    settle(50).await;

    sidebar.click("[data-sidebar=desktop] nav a[href='/orders']");
    assert_eq!(sidebar.close_calls.get_untracked(), 0);
}

#[wasm_bindgen_test]
async fn rows_restagger_after_role_change() {
    let sidebar = Harness::mount(false, Some(admin()));
    settle(100).await;
    // Orders is fifth for an admin, second for a cashier
    assert!(orders_row_style(&sidebar).contains(" 400ms"));

    sidebar.user.set(Some(User::new("Sam", Role::Cashier)));
    settle(100).await;
    assert_eq!(sidebar.count("[data-sidebar=desktop] nav a"), 3);
    let style = orders_row_style(&sidebar);
    assert!(style.contains(" 100ms"), "{style}");
}

fn orders_row_style(sidebar: &Harness) -> String {
    sidebar
        .find("[data-sidebar=desktop] nav a[href='/orders']")
        .and_then(|link| link.parent_element())
        .and_then(|row| row.get_attribute("style"))
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn no_user_renders_chrome_only() {
    let sidebar = Harness::mount(true, None);
    settle(50).await;

    assert!(sidebar.find("[data-sidebar=desktop]").is_some());
    assert!(sidebar.find("[data-sidebar=user-card]").is_none());
    assert_eq!(sidebar.count("nav a"), 0);
    let text = sidebar.container.text_content().unwrap_or_default();
    assert!(text.contains("StockMS"));
}

#[wasm_bindgen_test]
async fn user_card_shows_avatar_or_badge() {
    let sidebar = Harness::mount(false, Some(admin().with_avatar("/img/jane.png")));
    settle(50).await;

    let img = sidebar
        .find("[data-sidebar=desktop] [data-sidebar=user-card] img")
        .expect("avatar image");
    assert_eq!(img.get_attribute("src").as_deref(), Some("/img/jane.png"));
    assert_eq!(img.get_attribute("alt").as_deref(), Some("Jane Doe"));
    let card = sidebar.find("[data-sidebar=desktop] [data-sidebar=user-card]").unwrap();
    assert!(card.text_content().unwrap_or_default().contains("Admin"));

    let sidebar = Harness::mount(false, Some(User::new("Sam", Role::Cashier)));
    settle(50).await;
    assert!(sidebar.find("[data-sidebar=desktop] [data-sidebar=user-card] img").is_none());
    let card = sidebar.find("[data-sidebar=desktop] [data-sidebar=user-card]").unwrap();
    assert!(card.text_content().unwrap_or_default().contains("Cashier"));
}

#[wasm_bindgen_test]
async fn malformed_snapshot_is_left_in_storage() {
    let config = AppConfig::default();
    let key = config.user_storage_key;
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.set_item(key, "{bad").unwrap();

    let restored = RwSignal::new(Some(admin()));
    mount_to(fresh_container(), move || {
        provide_auth_context(&config);
        restored.set(use_auth().user.get_untracked());
    })
    .forget();
    settle(50).await;

    assert_eq!(restored.get_untracked(), None);
    assert_eq!(storage.get_item(key).unwrap().as_deref(), Some("{bad"));
    storage.remove_item(key).unwrap();
}
