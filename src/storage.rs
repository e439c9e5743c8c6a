//! Token persistence.
//!
//! The backend keeps its session token in a single named slot, the way a
//! browser client keeps it in local storage. Absence of the slot means
//! logged out; no other state is persisted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Name of the slot holding the active session token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// A key-value store for the session token slot.
///
/// Implementors stand in for whatever persistence a real client would use
/// (browser local storage, a keychain, a file). The backend only ever touches
/// the [`AUTH_TOKEN_KEY`] slot.
pub trait TokenStorage: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Removes `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// In-memory [`TokenStorage`] implementation.
///
/// Cloning the handle shares the underlying slots, so two backend instances
/// constructed over the same handle observe each other's writes. That models
/// a page reload: a fresh backend with an empty in-memory session slot, but
/// the same persisted token.
///
/// # Example
/// ```rust,ignore
/// let storage = MemoryStorage::new();
///
/// let mut first = MockBackend::new_with_storage(storage.clone());
/// first.login("admin@example.com", "password_123").await?;
///
/// // "Reload": a fresh instance still resolves the persisted session.
/// let second = MockBackend::new_with_storage(storage);
/// let auth_data = second.current_user().await?;
/// ```
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates an empty storage handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().expect("storage mutex poisoned")
    }
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_value() {
        let storage = MemoryStorage::new();

        storage.set(AUTH_TOKEN_KEY, "jwt_token_u1");

        assert_eq!(
            storage.get(AUTH_TOKEN_KEY),
            Some("jwt_token_u1".to_string())
        );
    }

    #[test]
    fn remove_clears_the_slot() {
        let storage = MemoryStorage::new();

        storage.set(AUTH_TOKEN_KEY, "jwt_token_u1");
        storage.remove(AUTH_TOKEN_KEY);

        assert_eq!(storage.get(AUTH_TOKEN_KEY), None);

        // Removing again is a no-op.
        storage.remove(AUTH_TOKEN_KEY);
    }

    #[test]
    fn clones_share_the_same_slots() {
        let storage = MemoryStorage::new();
        let clone = storage.clone();

        storage.set(AUTH_TOKEN_KEY, "jwt_token_u2");

        assert_eq!(clone.get(AUTH_TOKEN_KEY), Some("jwt_token_u2".to_string()));
    }
}
