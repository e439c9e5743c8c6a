use crate::accounts::{token_user_id, AuthStore};
use crate::error::SessionError;
use crate::MockBackend;

impl MockBackend {
    /// Resolves the account behind the active session.
    ///
    /// This method is usually called on startup to check whether a previously
    /// persisted session is still valid. It reads the in-memory token slot and
    /// falls back to the persisted slot when the in-memory one was never
    /// populated. Observes only; the session state never changes here.
    ///
    /// # Example
    /// ```rust,ignore
    /// let auth_data = backend.current_user().await?;
    ///
    /// println!("Still signed in as {}", auth_data.record.name);
    /// ```
    pub async fn current_user(&self) -> Result<AuthStore, SessionError> {
        tokio::time::sleep(self.latency.session_check).await;

        let Some(token) = self.token() else {
            return Err(SessionError::NoSession);
        };

        let user = token_user_id(&token).and_then(|id| self.users.iter().find(|user| user.id == id));

        let Some(user) = user else {
            tracing::warn!("Active session token does not resolve to an account");
            return Err(SessionError::Invalid);
        };

        Ok(AuthStore {
            record: user.public_view(),
            token,
        })
    }
}
