//! `authmock-rs` is an in-memory mock of an authentication backend.
//!
//! It simulates the server side of a signup/login/password-reset flow inside
//! the calling process: a seeded account store, derived pseudo tokens and an
//! artificial network delay before every response. There is no real
//! cryptography, no real token verification and no persistence beyond a
//! single token slot; the crate exists so frontends, demos and tests can
//! exercise complete authentication flows without standing up a server.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::error::Error;
//!
//! use authmock_rs::MockBackend;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn Error>> {
//!     let mut backend = MockBackend::new();
//!
//!     let auth_data = backend
//!         .login("admin@example.com", "password_123")
//!         .await?;
//!
//!     println!("Signed in as {}", auth_data.record.name);
//!
//!     let entries = backend.activity_log().await?;
//!
//!     println!("{} recent events", entries.len());
//!
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

use std::sync::Arc;

pub use accounts::activity_log::{LogEntry, LogStatus};
pub use accounts::{AuthStore, ResetMessage, Role, User};
pub use error::*;
pub use latency::Latency;
pub use state::AuthState;
pub use storage::{MemoryStorage, TokenStorage, AUTH_TOKEN_KEY};

use accounts::{PendingReset, StoredUser};

pub(crate) mod accounts;
pub mod error;
pub mod latency;
pub mod state;
pub mod storage;

/// An in-memory authentication backend.
///
/// Holds the account store, the single active session slot and the pending
/// password resets. Every operation suspends for a simulated network delay
/// before resolving, the way a remote API would; see [`Latency`].
///
/// There is at most one active session per backend: a new login or
/// registration overwrites whatever session was held before, last write
/// wins. This mirrors a browser tab sharing one token slot and is fine for a
/// demo, not for anything real.
///
/// The `Debug` implementation redacts the session token to prevent
/// accidental exposure in logs.
///
/// # Example
/// ```rust,ignore
/// use authmock_rs::MockBackend;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut backend = MockBackend::new();
///
///     let auth_data = backend
///         .register("Jane", "jane@example.com", "longpass1")
///         .await?;
///
///     println!("Registered with token: {}", auth_data.token);
///
///     Ok(())
/// }
/// ```
pub struct MockBackend {
    pub(crate) users: Vec<StoredUser>,
    pub(crate) pending_resets: Vec<PendingReset>,
    pub(crate) outbox: Vec<ResetMessage>,
    pub(crate) session_token: Option<String>,
    pub(crate) storage: Arc<dyn TokenStorage>,
    pub(crate) latency: Latency,
}

impl std::fmt::Debug for MockBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockBackend")
            .field("users", &self.users.len())
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "***REDACTED***"),
            )
            .field("latency", &self.latency)
            .finish()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Creates a backend seeded with the two demo accounts.
    ///
    /// The seed matches what the demo UI expects: `admin@example.com` /
    /// `password_123` (role `ADMIN`) and `user@example.com` / `password_456`
    /// (role `USER`). The token slot starts out empty.
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut backend = MockBackend::new();
    ///
    /// backend.login("user@example.com", "password_456").await?;
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_storage(MemoryStorage::new())
    }

    /// Creates a seeded backend over an injected token storage.
    ///
    /// Handing the same [`MemoryStorage`] handle to a second instance models
    /// a page reload: the new backend starts with an empty in-memory session
    /// slot but still sees the persisted token, so
    /// [`current_user`](Self::current_user) can resolve the session the
    /// previous instance established.
    ///
    /// # Example
    /// ```rust,ignore
    /// let storage = MemoryStorage::new();
    ///
    /// let mut backend = MockBackend::new_with_storage(storage.clone());
    /// backend.login("admin@example.com", "password_123").await?;
    ///
    /// let reloaded = MockBackend::new_with_storage(storage);
    /// let auth_data = reloaded.current_user().await?;
    /// ```
    #[must_use]
    pub fn new_with_storage(storage: impl TokenStorage + 'static) -> Self {
        Self {
            users: accounts::seeded_users(),
            pending_resets: Vec::new(),
            outbox: Vec::new(),
            session_token: None,
            storage: Arc::new(storage),
            latency: Latency::default(),
        }
    }

    /// Creates a backend with no accounts at all.
    ///
    /// Useful for exercising the paths that depend on an empty store, such
    /// as a reset token whose account is gone.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            users: Vec::new(),
            ..Self::new()
        }
    }

    /// Replaces the latency profile.
    ///
    /// Tests usually pass [`Latency::zero`] so flows resolve immediately.
    ///
    /// # Example
    /// ```rust,ignore
    /// let backend = MockBackend::new().with_latency(Latency::zero());
    /// ```
    #[must_use]
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Retrieves the active session token, if available.
    ///
    /// Reads the in-memory slot first and falls back to the persisted slot
    /// when the in-memory one was never populated, e.g. on a fresh instance
    /// over previously used storage.
    ///
    /// # Example
    /// ```rust,ignore
    /// if let Some(token) = backend.token() {
    ///     println!("Authenticated with token: {token}");
    /// } else {
    ///     println!("Not authenticated");
    /// }
    /// ```
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session_token
            .clone()
            .or_else(|| self.storage.get(AUTH_TOKEN_KEY))
    }

    /// Messages accumulated in the mock outbox, oldest first.
    ///
    /// One entry per password-reset request for a known address. Nothing is
    /// ever delivered; the outbox is how tests and demos get hold of the
    /// reset token a real backend would email out.
    #[must_use]
    pub fn outbox(&self) -> &[ResetMessage] {
        &self.outbox
    }

    pub(crate) fn persist_session(&mut self, token: String) {
        self.storage.set(AUTH_TOKEN_KEY, &token);
        self.session_token = Some(token);
    }
}
