//! User model
//!
//! An account in the multi-user library: a username, a password, and a
//! personal favourites list. Passwords are stored and compared in clear
//! form; this tool is a personal local catalog, not a security boundary.

use serde::{Deserialize, Serialize};

use super::album::Album;

/// A library user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique username, matched case-sensitively at login
    #[serde(rename = "Username")]
    pub username: String,

    /// Cleartext password, compared by exact equality
    #[serde(rename = "Password")]
    pub password: String,

    /// Personal favourites. Persisted as full album copies, in the order
    /// they were added.
    #[serde(rename = "Favourites", default)]
    pub favourites: Vec<Album>,
}

impl User {
    /// Create a new user with an empty favourites list
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            favourites: Vec::new(),
        }
    }

    /// Check a login attempt against this account
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_empty_favourites() {
        let user = User::new("alice", "pw1");
        assert_eq!(user.username, "alice");
        assert!(user.favourites.is_empty());
    }

    #[test]
    fn test_password_exact_match() {
        let user = User::new("alice", "pw1");
        assert!(user.password_matches("pw1"));
        assert!(!user.password_matches("PW1"));
        assert!(!user.password_matches("pw1 "));
    }

    #[test]
    fn test_serialization_field_names() {
        let mut user = User::new("bob", "hunter2");
        user.favourites
            .push(Album::new("Aja", "Steely Dan", 1977, vec!["Jazz Rock".into()]));

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"Username\""));
        assert!(json.contains("\"Password\""));
        assert!(json.contains("\"Favourites\""));

        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, back);
    }

    #[test]
    fn test_missing_favourites_defaults_empty() {
        let json = r#"{"Username": "carol", "Password": "pw"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.favourites.is_empty());
    }
}
