//! Dashboard user accounts (admin / RH / chef)

use serde::{Deserialize, Serialize};
use std::fmt;

use super::serde_helpers;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Rh,
    Chef,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Rh, Role::Chef];
    /// Roles allowed on management routes
    pub const MANAGE: &'static [Role] = &[Role::Admin, Role::Rh];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Rh => "rh",
            Role::Chef => "chef",
        }
    }

    /// Parse the stored role, tolerating case (`"RH"`, `"Chef"`).
    pub fn from_db(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(value))
    }

    pub fn can_manage(&self) -> bool {
        Self::MANAGE.contains(self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User as returned by the API (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct UserResponse {
    pub matricule: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: String,
}

/// `POST /adduser` payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserCreate {
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub matricule: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub role: Option<String>,
}

impl UserCreate {
    /// Names of the required fields left empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.matricule.is_none() {
            missing.push("matricule");
        }
        if self.name.is_none() {
            missing.push("name");
        }
        if crate::util::non_blank(self.password.as_deref()).is_none() {
            missing.push("password");
        }
        if self.email.is_none() {
            missing.push("email");
        }
        if self.role.is_none() {
            missing.push("role");
        }
        missing
    }
}

/// `PUT /api/chef/{matricule}` payload; a blank password keeps the current one
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// `PUT /api/user/{matricule}` profile payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// `POST /login` payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "serde_helpers::opt_string")]
    pub matricule: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// `POST /login` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub matricule: String,
    pub nom: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_db() {
        assert_eq!(Role::from_db("admin"), Some(Role::Admin));
        assert_eq!(Role::from_db("RH"), Some(Role::Rh));
        assert_eq!(Role::from_db(" Chef "), Some(Role::Chef));
        assert_eq!(Role::from_db("stagiaire"), None);
    }

    #[test]
    fn test_role_manage_group() {
        assert!(Role::Admin.can_manage());
        assert!(Role::Rh.can_manage());
        assert!(!Role::Chef.can_manage());
    }

    #[test]
    fn test_role_serde() {
        assert_eq!(serde_json::to_string(&Role::Rh).unwrap(), "\"rh\"");
        let role: Role = serde_json::from_str("\"chef\"").unwrap();
        assert_eq!(role, Role::Chef);
        assert_eq!(role.to_string(), "chef");
    }

    #[test]
    fn test_user_create_missing_fields() {
        let payload: UserCreate =
            serde_json::from_str(r#"{"matricule": 1204, "name": "Amine", "password": "  "}"#)
                .unwrap();
        assert_eq!(payload.matricule.as_deref(), Some("1204"));
        assert_eq!(payload.missing_fields(), vec!["password", "email", "role"]);
    }
}
