use serde::{Deserialize, Serialize};
use yew::Callback;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// The signed-in user as the header and shell see it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct User {
    pub name: String,
    pub role: Role,
    pub avatar_url: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Uppercased first letter, shown when there is no avatar image.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Shared through context so routed pages can see who is signed in.
#[derive(Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub request_login: Callback<()>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map_or(false, User::is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_uppercased() {
        let user = User {
            name: "thandi Mwansa".to_string(),
            role: Role::User,
            avatar_url: None,
        };
        assert_eq!(user.initial(), "T");
        assert!(!user.is_admin());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn session_admin_requires_admin_user() {
        let mut session = Session::default();
        assert!(!session.is_admin());
        session.user = Some(User {
            name: "Chanda".to_string(),
            role: Role::Admin,
            avatar_url: None,
        });
        assert!(session.is_admin());
    }
}
