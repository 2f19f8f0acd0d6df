//! Client configuration.

use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Name shown next to the logo.
    pub brand: &'static str,
    /// Media query for the breakpoint at which the desktop rail takes over.
    pub wide_query: &'static str,
    /// localStorage key holding the signed-in user snapshot.
    pub user_storage_key: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: "StockMS",
            wide_query: "(min-width: 1024px)",
            user_storage_key: "stockms-user",
        }
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
