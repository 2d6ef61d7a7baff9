use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The signed-in user, as stored under [`crate::keys::SESSION_KEY`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub email: String,
}

/// An entry of the user directory stored under [`crate::keys::USERS_KEY`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserRecord {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl UserRecord {
    /// Reads any JSON value as a record. Fields that are missing or not
    /// strings become `None`, so a damaged entry still takes its place in the
    /// directory instead of disappearing.
    pub fn from_value_lossy(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(String::from);
        Self {
            email: field("email"),
            role: field("role").map(Role::from),
        }
    }

    /// Only a record carrying an email can belong to a session.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.as_deref() == Some(email)
    }

    pub fn is_staff(&self) -> bool {
        self.role.as_ref().is_some_and(Role::is_staff)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Mod,
    /// Any other role string, kept verbatim.
    Other(String),
}

impl Role {
    /// Admins and moderators may delete library items.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Admin | Role::Mod)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => Role::Admin,
            "mod" => Role::Mod,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => "admin".to_string(),
            Role::Mod => "mod".to_string(),
            Role::Other(value) => value,
        }
    }
}
