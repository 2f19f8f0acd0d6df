//! The two visual variants of the sidebar.

use crate::motion::Motion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidebarVariant {
    /// Fixed rail on wide viewports.
    Desktop,
    /// Overlay panel with a backdrop, driven by the parent's open flag.
    Mobile,
}

impl SidebarVariant {
    pub fn is_rendered(&self, is_open: bool) -> bool {
        match self {
            SidebarVariant::Desktop => true,
            SidebarVariant::Mobile => is_open,
        }
    }

    /// Following a link also closes the panel.
    pub fn closes_on_navigate(&self) -> bool {
        matches!(self, SidebarVariant::Mobile)
    }

    pub fn has_close_button(&self) -> bool {
        matches!(self, SidebarVariant::Mobile)
    }

    pub fn panel_motion(&self) -> Motion {
        match self {
            SidebarVariant::Desktop => Motion::desktop_panel(),
            SidebarVariant::Mobile => Motion::mobile_panel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_always_rendered() {
        assert!(SidebarVariant::Desktop.is_rendered(false));
        assert!(SidebarVariant::Desktop.is_rendered(true));
    }

    #[test]
    fn test_mobile_follows_open_flag() {
        assert!(!SidebarVariant::Mobile.is_rendered(false));
        assert!(SidebarVariant::Mobile.is_rendered(true));
    }

    #[test]
    fn test_only_mobile_closes() {
        assert!(SidebarVariant::Mobile.closes_on_navigate());
        assert!(SidebarVariant::Mobile.has_close_button());
        assert!(!SidebarVariant::Desktop.closes_on_navigate());
        assert!(!SidebarVariant::Desktop.has_close_button());
    }

    #[test]
    fn test_only_mobile_panel_exits() {
        assert!(SidebarVariant::Mobile.panel_motion().exit.is_some());
        assert!(SidebarVariant::Desktop.panel_motion().exit.is_none());
    }
}
