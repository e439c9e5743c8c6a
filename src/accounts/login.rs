use thiserror::Error;

use crate::accounts::{pseudo_hash, session_token, AuthStore};
use crate::MockBackend;

/// Represents errors that can occur during the authentication process.
#[derive(Error, Debug)]
pub enum AuthenticationError {
    /// The email is unknown, or the password does not match the stored hash.
    ///
    /// The two causes are deliberately collapsed into a single outcome so
    /// the response cannot be used to probe which addresses have an account.
    #[error("Invalid credentials provided")]
    InvalidCredentials,
}

impl MockBackend {
    /// Authenticate with a combination of **email** and **password**.
    ///
    /// On success, the session token is persisted and used for subsequent
    /// session checks, overwriting any previously active session.
    ///
    /// # Example
    /// ```rust,ignore
    /// let auth_data = backend
    ///     .login("admin@example.com", "password_123")
    ///     .await?;
    ///
    /// println!("Token: {}", auth_data.token);
    /// ```
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<AuthStore, AuthenticationError> {
        tokio::time::sleep(self.latency.request).await;

        let user = self
            .users
            .iter()
            .find(|user| user.email == email)
            .filter(|user| user.password_hash == pseudo_hash(password));

        // Unknown email and wrong password take the same path, in the
        // response and in the log line.
        let Some(user) = user else {
            tracing::warn!("Login rejected");
            return Err(AuthenticationError::InvalidCredentials);
        };

        let token = session_token(&user.id);
        let record = user.public_view();

        self.persist_session(token.clone());

        tracing::info!("Login successful for user {}", record.id);

        Ok(AuthStore { record, token })
    }
}
