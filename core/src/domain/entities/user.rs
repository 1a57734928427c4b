//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted user row
///
/// Ids are database-assigned (SERIAL); a `User` value therefore only
/// exists after the row does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Database-assigned identifier
    pub id: i32,

    /// Display name
    pub name: String,

    /// Unique email address
    pub email: String,

    /// bcrypt hash of the password (salt embedded)
    pub password_hash: String,

    /// Whether the account is banned
    pub banned: bool,

    /// When the ban was applied, if any
    pub banned_at: Option<DateTime<Utc>>,

    /// Whether the account has admin privileges
    pub is_admin: bool,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public fields exposed after signup
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    /// Fields exposed after a successful login
    pub fn authenticated(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            is_admin: self.is_admin,
        }
    }

    pub fn ban(&mut self) {
        self.banned = true;
        self.banned_at = Some(Utc::now());
    }

    pub fn unban(&mut self) {
        self.banned = false;
        self.banned_at = None;
    }
}

/// Insert payload for a new account (password already hashed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// The user fields returned from signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// The user fields returned from login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            password_hash: "$2b$10$hash".to_string(),
            banned: false,
            banned_at: None,
            is_admin: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn public_view_drops_sensitive_fields() {
        let user = sample_user();
        let public = user.public();
        let value = serde_json::to_value(&public).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": 7, "name": "Ada", "email": "ada@x.com" })
        );
    }

    #[test]
    fn authenticated_view_uses_camel_case_admin_flag() {
        let user = sample_user();
        let value = serde_json::to_value(user.authenticated()).unwrap();
        assert_eq!(value["isAdmin"], serde_json::json!(true));
        assert!(value.get("password_hash").is_none());
    }

    #[test]
    fn ban_and_unban_track_timestamp() {
        let mut user = sample_user();
        user.ban();
        assert!(user.banned);
        assert!(user.banned_at.is_some());
        user.unban();
        assert!(!user.banned);
        assert!(user.banned_at.is_none());
    }
}
