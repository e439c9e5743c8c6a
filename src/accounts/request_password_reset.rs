use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::accounts::{PendingReset, ResetMessage};
use crate::MockBackend;

impl MockBackend {
    /// Requests a password reset link for the given email address.
    ///
    /// Completes identically whether the address has an account or not, so
    /// the call cannot be used to discover registered emails. For a known
    /// address a single-use reset token, valid for one hour, is bound to that
    /// account and a message is appended to the mock
    /// [outbox](MockBackend::outbox); nothing is actually delivered.
    ///
    /// # Example
    /// ```rust,ignore
    /// backend.request_password_reset("user@example.com").await;
    ///
    /// let message = backend.outbox().last().unwrap();
    /// backend.reset_password(&message.token, "a-new-password").await?;
    /// ```
    pub async fn request_password_reset(&mut self, email: &str) {
        tokio::time::sleep(self.latency.request).await;

        let user_id = self
            .users
            .iter()
            .find(|user| user.email == email)
            .map(|user| user.id.clone());

        if let Some(user_id) = user_id {
            let token = Uuid::new_v4().to_string();

            self.pending_resets.push(PendingReset {
                token: token.clone(),
                user_id,
                expires_at: Utc::now() + Duration::hours(1),
            });
            self.outbox.push(ResetMessage {
                recipient: email.to_string(),
                token,
            });
        }

        // Same log line on both paths, for the same reason the return
        // carries no outcome.
        tracing::info!("Password reset requested");
    }
}
