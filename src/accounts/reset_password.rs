use chrono::Utc;
use thiserror::Error;

use crate::accounts::pseudo_hash;
use crate::MockBackend;

/// Represents the various errors that can be obtained after a `reset_password` request.
#[derive(Error, Debug)]
pub enum PasswordResetError {
    /// The reset token is unknown, was already used, or is older than an hour.
    ///
    /// One outcome for all three causes; the caller is only told to request
    /// a fresh link.
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,
}

impl MockBackend {
    /// Sets a new password for the account that requested the reset token.
    ///
    /// The token must come from a prior
    /// [`request_password_reset`](MockBackend::request_password_reset) call
    /// for the same account and is consumed by this call, successful or not.
    /// The active session, if any, is left untouched.
    ///
    /// # Example
    /// ```rust,ignore
    /// backend.reset_password(&token, "a-new-password").await?;
    ///
    /// let auth_data = backend.login("user@example.com", "a-new-password").await?;
    /// ```
    pub async fn reset_password(
        &mut self,
        token: &str,
        new_password: &str,
    ) -> Result<(), PasswordResetError> {
        tokio::time::sleep(self.latency.request).await;

        let Some(position) = self
            .pending_resets
            .iter()
            .position(|reset| reset.token == token)
        else {
            tracing::warn!("Password reset rejected, unknown token");
            return Err(PasswordResetError::InvalidOrExpiredToken);
        };

        let reset = self.pending_resets.remove(position);

        if reset.expires_at < Utc::now() {
            tracing::warn!("Password reset rejected, expired token");
            return Err(PasswordResetError::InvalidOrExpiredToken);
        }

        let Some(user) = self.users.iter_mut().find(|user| user.id == reset.user_id) else {
            tracing::warn!("Password reset rejected, account no longer exists");
            return Err(PasswordResetError::InvalidOrExpiredToken);
        };

        user.password_hash = pseudo_hash(new_password);

        tracing::info!("Password reset for user {}", reset.user_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use crate::accounts::PendingReset;
    use crate::{Latency, MockBackend, PasswordResetError};

    #[tokio::test]
    async fn expired_token_is_rejected_and_consumed() {
        let mut backend = MockBackend::new().with_latency(Latency::zero());

        backend.pending_resets.push(PendingReset {
            token: "stale".to_string(),
            user_id: "u2".to_string(),
            expires_at: Utc::now() - Duration::minutes(1),
        });

        let error = backend
            .reset_password("stale", "irrelevant")
            .await
            .expect_err("expired token must not reset anything");

        assert!(matches!(error, PasswordResetError::InvalidOrExpiredToken));
        assert!(backend.pending_resets.is_empty());
    }
}
