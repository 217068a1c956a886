//! Bounded retry with linear backoff for idempotent operations.
//!
//! Only transport-level unavailability and load shedding are retried
//! (see `ClientError::is_retryable`). Domain errors, deadline expiry,
//! and anything unclassified re-raise immediately without consuming a
//! backoff sleep, and the attempt count is bounded so the caller's loop
//! always gets control back.

use std::future::Future;
use std::time::Duration;

use wearcast_clients::ClientError;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

impl RetryPolicy {
    /// `max_attempts` counts every invocation, not just retries; zero is
    /// treated as one attempt.
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Linear backoff: `backoff * (attempt_index + 1)`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.backoff * (attempt + 1)
    }

    /// Run `operation` until it succeeds, fails fatally, or the attempt
    /// budget runs out; exhaustion re-raises the last failure.
    pub async fn execute_with_retry<T, F, Fut>(&self, operation: F) -> Result<T, ClientError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(value) => {
                    if attempt > 0 {
                        tracing::info!(attempts = attempt + 1, "operation succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(err) => {
                    if !err.is_retryable() || attempt + 1 >= self.max_attempts {
                        return Err(err);
                    }
                    let delay = self.delay_for_attempt(attempt);
                    tracing::warn!(
                        attempt = attempt + 1,
                        max_attempts = self.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "retrying after transient failure"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Instant;
    use wearcast_core::DomainError;

    const BASE: Duration = Duration::from_millis(10);

    fn counter() -> Arc<AtomicU32> {
        Arc::new(AtomicU32::new(0))
    }

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let calls = counter();
        let policy = RetryPolicy::new(3, BASE);

        let result = policy
            .execute_with_retry(|| {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, ClientError>(42)
                }
            })
            .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retryable_failures_then_success() {
        let calls = counter();
        let policy = RetryPolicy::new(3, BASE);
        let start = Instant::now();

        let result = policy
            .execute_with_retry(|| {
                let calls = calls.clone();
                async move {
                    let n = calls.fetch_add(1, Ordering::SeqCst);
                    if n < 2 {
                        Err(ClientError::Unavailable("not yet".into()))
                    } else {
                        Ok("done")
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        // Linear backoff between attempts: base*1 + base*2.
        assert!(start.elapsed() >= BASE * 3);
    }

    #[tokio::test]
    async fn test_fatal_error_is_not_retried() {
        let calls = counter();
        let policy = RetryPolicy::new(3, Duration::from_millis(50));
        let start = Instant::now();

        let result: Result<(), _> = policy
            .execute_with_retry(|| {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err(ClientError::Domain(DomainError::city_not_found()))
                }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        // Re-raised immediately, no backoff sleep.
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_deadline_exceeded_is_fatal() {
        let calls = counter();
        let policy = RetryPolicy::new(3, BASE);

        let result: Result<(), _> = policy
            .execute_with_retry(|| {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err(ClientError::DeadlineExceeded)
                }
            })
            .await;

        assert!(matches!(result, Err(ClientError::DeadlineExceeded)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_exhaustion_re_raises_last_error() {
        let calls = counter();
        let policy = RetryPolicy::new(3, BASE);

        let result: Result<(), _> = policy
            .execute_with_retry(|| {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err(ClientError::Unavailable("still down".into()))
                }
            })
            .await;

        assert!(matches!(result, Err(ClientError::Unavailable(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_zero_attempts_still_runs_once() {
        let calls = counter();
        let policy = RetryPolicy::new(0, BASE);

        let result = policy
            .execute_with_retry(|| {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, ClientError>(())
                }
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_linear_delay_schedule() {
        let policy = RetryPolicy::new(5, Duration::from_secs(2));
        assert_eq!(policy.delay_for_attempt(0), Duration::from_secs(2));
        assert_eq!(policy.delay_for_attempt(1), Duration::from_secs(4));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_secs(6));
    }
}
