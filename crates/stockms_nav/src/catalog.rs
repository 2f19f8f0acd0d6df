//! Static navigation catalog and the role filter over it.
//!
//! The catalog is split into three groups (general, admin-only, personal)
//! and rendered in declaration order. An entry is visible iff the current
//! role is in its `roles` set.

use crate::role::Role;
use crate::route::is_active_route;
use crate::user::User;

/// Route paths shared by the catalog and the router.
pub mod paths {
    pub const DASHBOARD: &str = "/";
    pub const PRODUCTS: &str = "/products";
    pub const CATEGORIES: &str = "/categories";
    pub const SUPPLIERS: &str = "/suppliers";
    pub const ORDERS: &str = "/orders";
    pub const REPORTS: &str = "/reports";
    pub const USERS: &str = "/users";
    pub const SETTINGS: &str = "/settings";
    pub const PROFILE: &str = "/profile";
}

/// Symbolic icon reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Dashboard,
    Package,
    Folder,
    Truck,
    Cart,
    Chart,
    Users,
    Settings,
    Person,
    Brand,
    Close,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Dashboard => "📊",
            Icon::Package | Icon::Brand => "📦",
            Icon::Folder => "📁",
            Icon::Truck => "🚚",
            Icon::Cart => "🛒",
            Icon::Chart => "📈",
            Icon::Users => "👥",
            Icon::Settings => "⚙️",
            Icon::Person => "👤",
            Icon::Close => "✕",
        }
    }
}

/// One sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub roles: &'static [Role],
}

impl NavItem {
    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

const EVERYONE: &[Role] = &[Role::Admin, Role::Assistant, Role::Cashier];
const STAFF: &[Role] = &[Role::Admin, Role::Assistant];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

#[rustfmt::skip]
pub const CATALOG: [NavItem; 9] = [
    // General
    NavItem { name: "Dashboard", href: paths::DASHBOARD, icon: Icon::Dashboard, roles: EVERYONE },
    NavItem { name: "Products", href: paths::PRODUCTS, icon: Icon::Package, roles: STAFF },
    NavItem { name: "Categories", href: paths::CATEGORIES, icon: Icon::Folder, roles: STAFF },
    NavItem { name: "Suppliers", href: paths::SUPPLIERS, icon: Icon::Truck, roles: STAFF },
    NavItem { name: "Orders", href: paths::ORDERS, icon: Icon::Cart, roles: EVERYONE },
    NavItem { name: "Reports", href: paths::REPORTS, icon: Icon::Chart, roles: STAFF },
    // Admin
    NavItem { name: "User Management", href: paths::USERS, icon: Icon::Users, roles: ADMIN_ONLY },
    NavItem { name: "Settings", href: paths::SETTINGS, icon: Icon::Settings, roles: ADMIN_ONLY },
    // Personal
    NavItem { name: "Profile", href: paths::PROFILE, icon: Icon::Person, roles: EVERYONE },
];

/// Catalog entries visible to `role`, in catalog order. No role, no entries.
pub fn visible_items(role: Option<Role>) -> Vec<&'static NavItem> {
    let Some(role) = role else {
        return Vec::new();
    };
    CATALOG.iter().filter(|item| item.allows(role)).collect()
}

pub fn navigation_for(user: Option<&User>) -> Vec<&'static NavItem> {
    visible_items(user.map(|u| u.role))
}

/// The entry whose link is active at `pathname`, preferring the most specific href.
pub fn item_for_path(pathname: &str) -> Option<&'static NavItem> {
    CATALOG
        .iter()
        .filter(|item| is_active_route(pathname, item.href))
        .max_by_key(|item| item.href.len())
}
