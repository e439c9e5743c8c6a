//! Simulated network latency.

use std::time::Duration;

/// Artificial delays applied before the backend resolves a request.
///
/// The mock suspends for a fixed duration before answering, so consumers
/// experience the same loading states they would against a remote API. The
/// delay is part of the service contract rather than hidden inside the
/// operations: pass a custom profile to [`MockBackend::with_latency`] to
/// change it, or [`Latency::zero`] to remove it entirely.
///
/// # Example
/// ```rust,ignore
/// let backend = MockBackend::new().with_latency(Latency::zero());
/// ```
///
/// [`MockBackend::with_latency`]: crate::MockBackend::with_latency
#[derive(Clone, Copy, Debug)]
pub struct Latency {
    /// Pause before every regular operation resolves *(default: 800ms)*.
    pub request: Duration,
    /// Shorter pause before the session check resolves *(default: 200ms)*.
    ///
    /// Kept separate because the session check runs on every startup and a
    /// full-length delay there makes the consumer feel broken, not slow.
    pub session_check: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            request: Duration::from_millis(800),
            session_check: Duration::from_millis(200),
        }
    }
}

impl Latency {
    /// A profile without any delay, intended for tests.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            request: Duration::ZERO,
            session_check: Duration::ZERO,
        }
    }
}
