use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod activity_log;
pub mod current_user;
pub mod login;
pub mod logout;
pub mod register;
pub mod request_password_reset;
pub mod reset_password;

/// Access level attached to every account.
///
/// Serializes as the uppercase strings (`"USER"`, `"ADMIN"`) consumers gate
/// their restricted views on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Regular account. Every registration receives this role.
    User,
    /// Elevated account, unlocks the restricted admin view.
    Admin,
}

/// Public view of an account.
///
/// This is the shape handed back to consumers: the stored record with the
/// password hash stripped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The account's unique ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address, unique across the store.
    pub email: String,
    /// Access level.
    pub role: Role,
    /// The timestamp when the account was created.
    pub created_at: DateTime<Utc>,
}

/// Stores authentication details for a signed-in account.
///
/// The `AuthStore` struct holds the authenticated account's record and the
/// session token used to resolve the account on later checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStore {
    /// The authenticated account's record.
    pub record: User,
    /// The session token.
    pub token: String,
}

/// A message in the mock outbox, standing in for a password-reset email.
///
/// Nothing is ever delivered anywhere; the outbox only makes "a link was
/// sent" observable to tests and demos.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetMessage {
    /// Address the reset link would have been sent to.
    pub recipient: String,
    /// The reset token embedded in that link.
    pub token: String,
}

/// Internal account record. Never leaves the store as-is; callers get the
/// [`User`] view instead.
#[derive(Clone, Debug)]
pub(crate) struct StoredUser {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) role: Role,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) password_hash: String,
}

impl StoredUser {
    pub(crate) fn public_view(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// A password reset that was requested but not performed yet.
///
/// Single-use: consumed by the reset whether it succeeds or turns out to be
/// expired.
#[derive(Clone, Debug)]
pub(crate) struct PendingReset {
    pub(crate) token: String,
    pub(crate) user_id: String,
    pub(crate) expires_at: DateTime<Utc>,
}

/// Derives the stand-in password hash stored for an account.
///
/// A reversible transform, not a real hash. It only exists to demonstrate
/// the flow; a real backend would use a proper KDF here.
pub(crate) fn pseudo_hash(password: &str) -> String {
    format!("hashed_{password}")
}

/// Derives the session token handed out for an account id.
///
/// Unsigned and guessable, standing in for a real credential.
pub(crate) fn session_token(user_id: &str) -> String {
    format!("jwt_token_{user_id}")
}

/// Resolves a session token back to the account id it was derived from.
pub(crate) fn token_user_id(token: &str) -> Option<&str> {
    token.strip_prefix("jwt_token_")
}

/// The two demo accounts present in a freshly seeded store.
pub(crate) fn seeded_users() -> Vec<StoredUser> {
    vec![
        StoredUser {
            id: "u1".to_string(),
            name: "System Admin".to_string(),
            email: "admin@example.com".to_string(),
            role: Role::Admin,
            created_at: Utc::now(),
            password_hash: pseudo_hash("password_123"),
        },
        StoredUser {
            id: "u2".to_string(),
            name: "Regular User".to_string(),
            email: "user@example.com".to_string(),
            role: Role::User,
            created_at: Utc::now(),
            password_hash: pseudo_hash("password_456"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_token_round_trips_to_user_id() {
        let token = session_token("u1");

        assert_eq!(token, "jwt_token_u1");
        assert_eq!(token_user_id(&token), Some("u1"));
    }

    #[test]
    fn foreign_token_does_not_resolve() {
        assert_eq!(token_user_id("some-other-token"), None);
    }

    #[test]
    fn pseudo_hash_is_deterministic() {
        assert_eq!(pseudo_hash("password_123"), "hashed_password_123");
        assert_eq!(pseudo_hash("password_123"), pseudo_hash("password_123"));
    }

    #[test]
    fn seeded_store_has_one_admin_and_one_regular_account() {
        let users = seeded_users();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].role, Role::Admin);
        assert_eq!(users[1].role, Role::User);

        let mut emails: Vec<_> = users.iter().map(|user| user.email.as_str()).collect();
        emails.dedup();
        assert_eq!(emails.len(), 2);
    }

    #[test]
    fn public_view_strips_the_hash() {
        let user = seeded_users().remove(0);
        let view = user.public_view();

        assert_eq!(view.id, user.id);
        assert_eq!(view.email, user.email);

        let json = serde_json::to_value(&view).expect("serialize user view");
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
    }
}
