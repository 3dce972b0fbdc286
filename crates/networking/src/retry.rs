//! Retry logic for transient failures
//!
//! Wraps an async operation with a bounded number of retries, spacing
//! attempts with the `backoff` crate's exponential schedule. Only errors the
//! caller classifies as transient are retried; permanent errors surface
//! immediately.

use backoff::backoff::Backoff;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use std::future::Future;
use std::time::Duration;

/// Classifies errors as worth retrying or not
pub trait Retryable {
    /// Whether a retry could plausibly succeed
    fn is_transient(&self) -> bool;
}

/// Retry policy configuration
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum retry attempts after the initial try
    pub max_retries: u32,
    /// First backoff interval
    pub initial_interval: Duration,
    /// Upper bound on any single interval
    pub max_interval: Duration,
    /// Interval growth factor
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_interval: Duration::from_millis(250),
            max_interval: Duration::from_secs(5),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Create a new policy with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// A policy that never retries
    pub fn no_retries() -> Self {
        Self { max_retries: 0, ..Default::default() }
    }

    /// Set the maximum retry attempts
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the first backoff interval
    pub fn initial_interval(mut self, interval: Duration) -> Self {
        self.initial_interval = interval;
        self
    }

    /// Set the interval upper bound
    pub fn max_interval(mut self, interval: Duration) -> Self {
        self.max_interval = interval;
        self
    }

    fn to_backoff(&self) -> ExponentialBackoff {
        ExponentialBackoffBuilder::new()
            .with_initial_interval(self.initial_interval)
            .with_max_interval(self.max_interval)
            .with_multiplier(self.multiplier)
            .with_max_elapsed_time(None)
            .build()
    }
}

/// Run an operation, retrying transient failures per the policy
///
/// The operation is always attempted at least once. The final error is the
/// one from the last attempt.
pub async fn with_retry<T, E, Fut, Op>(policy: &RetryPolicy, mut op: Op) -> Result<T, E>
where
    E: Retryable + std::fmt::Display,
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut backoff = policy.to_backoff();
    let mut attempts = 0;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() && attempts < policy.max_retries => {
                attempts += 1;
                let delay = backoff.next_backoff().unwrap_or(policy.max_interval);
                tracing::debug!(error = %err, attempt = attempts, ?delay, "retrying after transient failure");
                tokio::time::sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}
