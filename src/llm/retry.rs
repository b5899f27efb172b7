use std::time::Duration;

use log::warn;

/// Fixed-delay retry policy: every failed attempt waits the same amount
/// before the next one. No backoff, no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

/// Run `operation` up to `policy.max_attempts` times, sleeping `policy.delay`
/// between attempts. The `operation` closure is invoked each attempt with the
/// attempt index (0-based).
///
/// Any error counts as a failure and triggers a retry; no distinction is made
/// between failure classes. The first success returns immediately. Once the
/// budget is exhausted the last error is returned unmodified.
pub async fn retry<F, Fut, T, E>(policy: &RetryPolicy, mut operation: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let max = policy.max_attempts.max(1);
    let mut attempt: u32 = 0;
    loop {
        match operation(attempt).await {
            Ok(val) => return Ok(val),
            Err(err) => {
                if attempt + 1 >= max {
                    return Err(err);
                }
                warn!(
                    "attempt {}/{} failed: {}; retrying in {:?}",
                    attempt + 1,
                    max,
                    err,
                    policy.delay
                );
                attempt += 1;
                tokio::time::sleep(policy.delay).await;
            }
        }
    }
}
