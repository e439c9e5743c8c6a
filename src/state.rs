//! View-facing authentication state.
//!
//! A consumer (a UI shell, a TUI, a test harness) mirrors the backend's
//! responses into this struct and renders from it. The backend stays
//! authoritative; this is derived state with a defined lifecycle: loading on
//! startup, then authenticated, failed or signed out.

use crate::accounts::{AuthStore, User};

/// Snapshot of the authentication state as a consumer sees it.
///
/// Starts in the loading state, because the first thing a consumer does is
/// check whether a persisted session is still valid.
///
/// # Example
/// ```rust,ignore
/// let mut state = AuthState::default();
///
/// match backend.current_user().await {
///     Ok(auth_data) => state.authenticated(auth_data),
///     Err(_) => state.signed_out(),
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    /// The signed-in user, if resolved.
    pub user: Option<User>,
    /// Session token belonging to `user`.
    pub access_token: Option<String>,
    /// Whether a request is in flight, including the startup session check.
    pub is_loading: bool,
    /// Message of the last failed request, cleared by the next attempt.
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            access_token: None,
            is_loading: true,
            error: None,
        }
    }
}

impl AuthState {
    /// Marks a request as in flight and clears any previous error.
    pub fn begin_request(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Applies a successful login, registration or session check.
    pub fn authenticated(&mut self, auth_data: AuthStore) {
        self.user = Some(auth_data.record);
        self.access_token = Some(auth_data.token);
        self.is_loading = false;
        self.error = None;
    }

    /// Applies a failed request, keeping whatever user was already resolved.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.error = Some(message.into());
    }

    /// Returns to the signed-out state.
    pub fn signed_out(&mut self) {
        self.user = None;
        self.access_token = None;
        self.is_loading = false;
        self.error = None;
    }

    /// Whether a user is currently resolved.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::seeded_users;

    fn auth_data() -> AuthStore {
        let record = seeded_users().remove(1).public_view();
        let token = crate::accounts::session_token(&record.id);
        AuthStore { record, token }
    }

    #[test]
    fn starts_loading_and_anonymous() {
        let state = AuthState::default();

        assert!(state.is_loading);
        assert!(!state.is_authenticated());
        assert_eq!(state.error, None);
    }

    #[test]
    fn authenticated_resolves_user_and_clears_error() {
        let mut state = AuthState::default();
        state.failed("Invalid credentials provided");

        state.begin_request();
        state.authenticated(auth_data());

        assert!(state.is_authenticated());
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(state.access_token.as_deref(), Some("jwt_token_u2"));
    }

    #[test]
    fn failed_stops_loading_and_records_the_message() {
        let mut state = AuthState::default();

        state.begin_request();
        state.failed("Invalid credentials provided");

        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("Invalid credentials provided"));
    }

    #[test]
    fn signed_out_drops_everything() {
        let mut state = AuthState::default();
        state.authenticated(auth_data());

        state.signed_out();

        assert_eq!(state, AuthState {
            user: None,
            access_token: None,
            is_loading: false,
            error: None,
        });
    }
}
