//! Signed-in user snapshot, as handed over by the auth layer.

use serde::{Deserialize, Serialize};

use crate::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// What the user card shows in the avatar slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarView<'a> {
    Image { src: &'a str, alt: &'a str },
    /// Generic-person glyph in a colored badge.
    Badge,
}

impl User {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// An empty avatar reference counts as no avatar.
    pub fn avatar_view(&self) -> AvatarView<'_> {
        match self.avatar.as_deref() {
            Some(src) if !src.is_empty() => AvatarView::Image {
                src,
                alt: &self.name,
            },
            _ => AvatarView::Badge,
        }
    }

    pub fn role_label(&self) -> &'static str {
        self.role.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_image_when_present() {
        let user = User::new("Jane Doe", Role::Admin).with_avatar("/img/jane.png");
        assert_eq!(
            user.avatar_view(),
            AvatarView::Image {
                src: "/img/jane.png",
                alt: "Jane Doe"
            }
        );
    }

    #[test]
    fn test_badge_when_missing_or_empty() {
        let user = User::new("Sam", Role::Cashier);
        assert_eq!(user.avatar_view(), AvatarView::Badge);

        let user = user.with_avatar("");
        assert_eq!(user.avatar_view(), AvatarView::Badge);
    }

    #[test]
    fn test_whitespace_avatar_is_still_an_image() {
        let user = User::new("Sam", Role::Cashier).with_avatar(" ");
        assert_eq!(user.avatar_view(), AvatarView::Image { src: " ", alt: "Sam" });
    }

    #[test]
    fn test_role_label_is_verbatim() {
        for role in Role::ALL {
            assert_eq!(User::new("x", role).role_label(), role.as_str());
        }
    }

    #[test]
    fn test_deserialize_without_avatar() {
        let user: User = serde_json::from_str(r#"{"name":"Ana","role":"Assistant"}"#).unwrap();
        assert_eq!(user, User::new("Ana", Role::Assistant));
    }
}
