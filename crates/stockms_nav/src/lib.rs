//! StockMS navigation model
//!
//! Everything the sidebar needs that does not touch the DOM:
//! - **Roles and users**: who is signed in and what tier they hold.
//! - **Catalog**: the static navigation entries and the role filter over them.
//! - **Route matching**: which entry is highlighted for the current path.
//! - **Motion**: enter/exit transitions as plain configuration values, plus
//!   the presence phase machine that sequences them.

pub mod catalog;
pub mod motion;
pub mod presence;
pub mod role;
pub mod route;
pub mod user;
pub mod variant;

pub use catalog::{item_for_path, navigation_for, paths, visible_items, Icon, NavItem, CATALOG};
pub use motion::{Motion, Pose, Spring, Transition};
pub use presence::PresencePhase;
pub use role::{ParseRoleError, Role};
pub use route::is_active_route;
pub use user::{AvatarView, User};
pub use variant::SidebarVariant;
