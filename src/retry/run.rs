//! Retry loop: run a probe until success, a fatal error, or budget exhaustion.

use super::classify;
use super::error::{ProbeError, RetryError};
use super::policy::{RetryDecision, RetryPolicy};
use std::time::Duration;

/// Runs a probe closure until it succeeds or the budget runs out, sleeping
/// the policy's fixed delay after every failed attempt. Returns the number
/// of attempts issued on success.
///
/// A `max_attempts` of zero issues no probes at all.
pub fn run_with_retry<F>(policy: &RetryPolicy, op: F) -> Result<u32, RetryError>
where
    F: FnMut() -> Result<(), ProbeError>,
{
    run_with_retry_sleep(policy, op, std::thread::sleep)
}

/// Like [`run_with_retry`] but with an injectable sleep, so tests can count
/// and measure pauses instead of waiting them out.
pub fn run_with_retry_sleep<F, S>(
    policy: &RetryPolicy,
    mut op: F,
    mut sleep: S,
) -> Result<u32, RetryError>
where
    F: FnMut() -> Result<(), ProbeError>,
    S: FnMut(Duration),
{
    let mut attempts = 0u32;
    let mut last: Option<ProbeError> = None;
    while attempts < policy.max_attempts {
        match op() {
            Ok(()) => return Ok(attempts + 1),
            Err(e) => {
                let kind = classify::classify(&e);
                match policy.decide(kind) {
                    RetryDecision::NoRetry => return Err(RetryError::Fatal(e)),
                    RetryDecision::RetryAfter(d) => {
                        tracing::warn!(
                            "attempt {} failed ({}); retrying in {}s",
                            attempts + 1,
                            e,
                            d.as_secs()
                        );
                        sleep(d);
                        attempts += 1;
                        last = Some(e);
                    }
                }
            }
        }
    }
    Err(RetryError::Exhausted { attempts, last })
}
