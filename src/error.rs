//! Various errors module.

use thiserror::Error;

pub use crate::accounts::login::AuthenticationError;
pub use crate::accounts::register::RegisterError;
pub use crate::accounts::reset_password::PasswordResetError;

/// Represents errors raised while resolving the active session.
///
/// These are shared by every operation that needs a signed-in account,
/// each indicating a specific issue encountered.
#[derive(Error, Debug)]
pub enum SessionError {
    /// No session token is held in the in-memory slot or the persisted slot.
    ///
    /// The caller was never signed in, or signed out since.
    #[error("No session")]
    NoSession,
    /// A session token is present but does not resolve to any stored account.
    ///
    /// Usually a left-over persisted token from a store that no longer holds
    /// the account it was issued for.
    #[error("Session invalid")]
    Invalid,
    /// The operation requires an active session and none is present.
    #[error("Unauthorized")]
    Unauthorized,
}
