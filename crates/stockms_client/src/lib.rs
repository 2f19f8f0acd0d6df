//! StockMS Client
//!
//! Web shell for the stock-management app. Renders the role-aware sidebar
//! (desktop rail plus mobile overlay) around routed content.
//!
//! # Key Features
//! - **Role filtering**: navigation comes from `stockms_nav`, filtered by the signed-in role
//! - **Explicit inputs**: the sidebar receives the open flag, close callback and user as props
//! - **Declarative motion**: enter/exit transitions are config values rendered to inline CSS

pub mod app;
pub mod auth;
pub mod config;
mod hooks;
pub mod layout;
mod pages;

pub use app::App;
pub use layout::Sidebar;
