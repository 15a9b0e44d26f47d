use std::time::Duration;

/// High-level classification of a probe failure for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect/read).
    Timeout,
    /// Network-level failure (connection refused, DNS, reset, etc.).
    Connection,
    /// Response arrived with a status other than 200. Retried, so a service
    /// that is still warming up consumes budget instead of spinning.
    HttpStatus(u16),
    /// Any other error (bad protocol, internal curl failure). Not retried.
    Other,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Fixed-delay retry policy.
///
/// The delay is constant per attempt; the attempt budget itself is enforced
/// by the runner loop, which pauses after every failed attempt (including
/// the last one) before giving up.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of failed attempts before giving up.
    pub max_attempts: u32,
    /// Pause between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Decide whether an error of the given kind is worth another attempt.
    pub fn decide(&self, kind: ErrorKind) -> RetryDecision {
        match kind {
            ErrorKind::Other => RetryDecision::NoRetry,
            ErrorKind::Timeout | ErrorKind::Connection | ErrorKind::HttpStatus(_) => {
                RetryDecision::RetryAfter(self.delay)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_retry_for_other() {
        let p = RetryPolicy::default();
        assert_eq!(p.decide(ErrorKind::Other), RetryDecision::NoRetry);
    }

    #[test]
    fn transient_kinds_retry_with_fixed_delay() {
        let p = RetryPolicy {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        };
        for kind in [
            ErrorKind::Timeout,
            ErrorKind::Connection,
            ErrorKind::HttpStatus(503),
        ] {
            assert_eq!(
                p.decide(kind),
                RetryDecision::RetryAfter(Duration::from_secs(2)),
                "kind {:?} should retry",
                kind
            );
        }
    }

    #[test]
    fn delay_does_not_grow_between_attempts() {
        let p = RetryPolicy {
            max_attempts: 10,
            delay: Duration::from_millis(250),
        };
        let first = p.decide(ErrorKind::Connection);
        let later = p.decide(ErrorKind::Connection);
        assert_eq!(first, later);
    }
}
