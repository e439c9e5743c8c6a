use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::accounts::{pseudo_hash, session_token, AuthStore, Role, StoredUser};
use crate::MockBackend;

/// Represents the various errors that can be obtained after a `register` request.
#[derive(Error, Debug)]
pub enum RegisterError {
    /// Another account already uses the given email address.
    ///
    /// The comparison is a case-sensitive exact match, the same lookup
    /// [`login`](crate::MockBackend::login) performs.
    #[error("Email already registered")]
    DuplicateEmail,
}

impl MockBackend {
    /// Registers a new account and signs it in.
    ///
    /// Every registration gets the [`Role::User`] role; the demo store has no
    /// path to create further admins. On success the new session token is
    /// persisted, overwriting any previously active session.
    ///
    /// # Example
    /// ```rust,ignore
    /// let auth_data = backend
    ///     .register("Jane", "jane@example.com", "longpass1")
    ///     .await?;
    ///
    /// println!("Token: {}", auth_data.token);
    /// ```
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthStore, RegisterError> {
        tokio::time::sleep(self.latency.request).await;

        if self.users.iter().any(|user| user.email == email) {
            tracing::warn!("Registration rejected, email already registered");
            return Err(RegisterError::DuplicateEmail);
        }

        let user = StoredUser {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: Role::User,
            created_at: Utc::now(),
            // In a real backend: a KDF such as bcrypt, never this.
            password_hash: pseudo_hash(password),
        };

        let token = session_token(&user.id);
        let record = user.public_view();

        self.users.push(user);
        self.persist_session(token.clone());

        tracing::info!("Account registered for user {}", record.id);

        Ok(AuthStore { record, token })
    }
}
