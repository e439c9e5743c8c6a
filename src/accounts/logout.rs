use crate::storage::AUTH_TOKEN_KEY;
use crate::MockBackend;

impl MockBackend {
    /// Signs out by clearing the persisted token and the in-memory slot.
    ///
    /// Idempotent; signing out without an active session is a no-op. Unlike
    /// the other operations this resolves immediately, without the simulated
    /// network pause.
    ///
    /// # Example
    /// ```rust,ignore
    /// backend.logout();
    ///
    /// assert!(backend.token().is_none());
    /// ```
    pub fn logout(&mut self) {
        self.storage.remove(AUTH_TOKEN_KEY);
        self.session_token = None;

        tracing::debug!("Session cleared");
    }
}
