//! Session management
//!
//! Login and sign-up against the in-memory user collection. A session is
//! ephemeral: it records which user index is authenticated for this run and
//! is never persisted. Once logged in there is no logout; the session ends
//! with the process.
//!
//! The trust model is deliberately weak: cleartext passwords compared by
//! exact equality, no attempt limit, no lockout. This is a personal local
//! tool, not a security boundary.

use crate::error::{ShelfError, ShelfResult};
use crate::models::User;

/// The authenticated user for the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    user_index: usize,
}

impl Session {
    /// Index of the current user within the user collection
    pub fn user_index(&self) -> usize {
        self.user_index
    }
}

/// Authenticate against the user collection.
///
/// Username lookup is case-sensitive exact match; the password must match
/// exactly. An unknown username and a wrong password fail identically with
/// `AuthenticationFailed` so the prompt gives nothing away about which
/// usernames exist.
pub fn login(users: &[User], username: &str, password: &str) -> ShelfResult<Session> {
    users
        .iter()
        .position(|u| u.username == username && u.password_matches(password))
        .map(|user_index| Session { user_index })
        .ok_or(ShelfError::AuthenticationFailed)
}

/// Register a new account with an empty favourites list.
///
/// Fails with `DuplicateUser` if the username is taken. Does not log the
/// new user in; the operator logs in separately afterwards.
pub fn signup(users: &mut Vec<User>, username: &str, password: &str) -> ShelfResult<()> {
    if users.iter().any(|u| u.username == username) {
        return Err(ShelfError::DuplicateUser(username.to_string()));
    }
    users.push(User::new(username, password));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_then_login_scenario() {
        let mut users: Vec<User> = Vec::new();

        signup(&mut users, "alice", "pw1").unwrap();
        assert_eq!(users.len(), 1);
        assert!(users[0].favourites.is_empty());

        let err = login(&users, "alice", "wrong").unwrap_err();
        assert!(matches!(err, ShelfError::AuthenticationFailed));

        let session = login(&users, "alice", "pw1").unwrap();
        assert_eq!(users[session.user_index()].username, "alice");
    }

    #[test]
    fn test_login_unknown_user_fails_identically() {
        let users = vec![User::new("alice", "pw1")];
        let unknown = login(&users, "mallory", "pw1").unwrap_err();
        let wrong_pw = login(&users, "alice", "nope").unwrap_err();
        assert_eq!(unknown.to_string(), wrong_pw.to_string());
    }

    #[test]
    fn test_login_username_is_case_sensitive() {
        let users = vec![User::new("Alice", "pw1")];
        assert!(login(&users, "alice", "pw1").is_err());
        assert!(login(&users, "Alice", "pw1").is_ok());
    }

    #[test]
    fn test_signup_duplicate_rejected() {
        let mut users = vec![User::new("alice", "pw1")];
        let err = signup(&mut users, "alice", "other").unwrap_err();
        assert!(matches!(err, ShelfError::DuplicateUser(_)));
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].password, "pw1");
    }

    #[test]
    fn test_signup_does_not_auto_login() {
        let mut users: Vec<User> = Vec::new();
        // signup returns no session; only login does
        signup(&mut users, "bob", "pw").unwrap();
        let session = login(&users, "bob", "pw").unwrap();
        assert_eq!(session.user_index(), 0);
    }
}
