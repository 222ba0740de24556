//! Retry policy: which HTTP statuses to retry and how long to back off.

use std::time::Duration;

/// Hard ceiling on retry attempts per call, regardless of configuration.
///
/// Bounds worst-case latency and task usage; the dispatcher clamps the
/// configured attempt count with this constant.
pub const ATTEMPT_CEILING: u32 = 5;

/// Decides whether a received HTTP status is worth another attempt, and
/// supplies the backoff parameters.
///
/// `should_retry` is a pure function of the status code. The status set is
/// policy-owned, never hardcoded in the dispatcher; implement this trait to
/// retry a different set of codes.
pub trait RetryPolicy: Send + Sync {
    /// Should a response with this status code be retried?
    fn should_retry(&self, status: u16) -> bool;

    /// Configured maximum number of retry attempts beyond the first try.
    ///
    /// Clamped by the dispatcher to [`ATTEMPT_CEILING`].
    fn max_attempts(&self) -> u32;

    /// Base delay for exponential backoff.
    fn base_delay(&self) -> Duration;
}

/// Default retry policy: retries 429 and 503.
#[derive(Debug, Clone)]
pub struct DefaultRetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl DefaultRetryPolicy {
    /// Create a policy with the given attempt cap and backoff base.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }
}

impl Default for DefaultRetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: crate::DEFAULT_RETRY_ATTEMPTS,
            base_delay: Duration::from_millis(crate::DEFAULT_RETRY_DELAY_MILLIS),
        }
    }
}

impl RetryPolicy for DefaultRetryPolicy {
    fn should_retry(&self, status: u16) -> bool {
        matches!(status, 429 | 503)
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn base_delay(&self) -> Duration {
        self.base_delay
    }
}

/// Backoff delay for the n-th retry attempt: `base * 2^(attempt-1)`.
///
/// Attempts are numbered from 1. Jitter-free by design of the protocol core.
pub fn delay_for_attempt(base: Duration, attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(31);
    base.saturating_mul(1u32 << exponent)
}

/// The effective attempt budget: configured cap clamped to [`ATTEMPT_CEILING`].
pub fn clamped_attempts(policy: &dyn RetryPolicy) -> u32 {
    policy.max_attempts().min(ATTEMPT_CEILING)
}
