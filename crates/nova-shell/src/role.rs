//! User identity as seen by the shell.
//!
//! The shell never authenticates anyone. It receives a name and a role from
//! the session collaborator and treats both as read-only input.

use serde::{Deserialize, Serialize};

/// Access role used for navigation gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    /// Also used when nobody is signed in.
    #[default]
    User,
}

impl Role {
    /// Human-readable label for the account menu.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::User => "Standard User",
        }
    }

    /// Parse the wire form (`"admin"` / `"user"`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "user" => Some(Self::User),
            _ => None,
        }
    }

    /// All roles.
    pub const ALL: [Self; 2] = [Self::Admin, Self::User];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentUser {
    pub name: String,
    pub role: Role,
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl CurrentUser {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    /// Placeholder identity used before the session collaborator supplies one.
    pub fn anonymous() -> Self {
        Self::new("User", Role::User)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_anonymous_user_is_restricted() {
        let user = CurrentUser::anonymous();
        assert_eq!(user.name, "User");
        assert_eq!(user.role, Role::User);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let user = CurrentUser::new("John Doe", Role::Admin);
        let toml_str = toml::to_string(&user).unwrap();
        assert!(toml_str.contains("role = \"admin\""));
        let parsed: CurrentUser = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, user);
    }
}
