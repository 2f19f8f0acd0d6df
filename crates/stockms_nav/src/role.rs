//! Access tiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Access tier of a signed-in user.
///
/// Deserializes through [`FromStr`], so stored snapshots get the same
/// whitespace tolerance and error as any other parsed role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Role {
    Admin,
    Assistant,
    Cashier,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Assistant, Role::Cashier];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Assistant => "Assistant",
            Role::Cashier => "Cashier",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0:?}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == trimmed)
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

impl TryFrom<String> for Role {
    type Error = ParseRoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" Cashier ".parse::<Role>(), Ok(Role::Cashier));
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "admin".parse::<Role>().unwrap_err();
        assert_eq!(err, ParseRoleError("admin".to_string()));
        assert_eq!(err.to_string(), "unknown role: \"admin\"");
    }

    #[test]
    fn test_serde_uses_role_names() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"Assistant\"");
        let role: Role = serde_json::from_str("\" Cashier \"").unwrap();
        assert_eq!(role, Role::Cashier);

        let err = serde_json::from_str::<Role>("\"Manager\"").unwrap_err();
        assert!(err.to_string().contains("unknown role: \"Manager\""), "{err}");
    }
}
