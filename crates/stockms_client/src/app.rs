//! Application root component.

use leptos::prelude::*;
use leptos_router::components::Router;

use crate::auth::provide_auth_context;
use crate::config::AppConfig;
use crate::layout::AppLayout;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    provide_auth_context(&config);
    provide_context(config);

    view! {
        <Router>
            <AppLayout/>
        </Router>
    }
}
