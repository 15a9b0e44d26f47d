//! Probe error types for retry classification.

use std::fmt;

/// Error returned by a single reachability probe (curl failure or non-200
/// status). Kept as an enum so we can classify and decide retries before
/// converting to anyhow.
#[derive(Debug)]
pub enum ProbeError {
    /// Curl reported an error (timeout, connection, DNS, etc.).
    Curl(curl::Error),
    /// Response arrived but the status was not 200.
    Http(u16),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Curl(e) => write!(f, "{}", e),
            ProbeError::Http(code) => write!(f, "HTTP {}", code),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::Curl(e) => Some(e),
            ProbeError::Http(_) => None,
        }
    }
}

impl From<curl::Error> for ProbeError {
    fn from(e: curl::Error) -> Self {
        ProbeError::Curl(e)
    }
}

/// Terminal outcome of the retry loop when it does not succeed.
#[derive(Debug)]
pub enum RetryError {
    /// A probe failed with an error the policy refuses to retry.
    Fatal(ProbeError),
    /// Every attempt in the budget failed with a retryable error.
    /// `last` is `None` only when the budget was zero attempts.
    Exhausted {
        attempts: u32,
        last: Option<ProbeError>,
    },
}

impl fmt::Display for RetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryError::Fatal(e) => write!(f, "not retryable: {}", e),
            RetryError::Exhausted { attempts, last: Some(e) } => {
                write!(f, "budget of {} attempts exhausted; last error: {}", attempts, e)
            }
            RetryError::Exhausted { attempts, last: None } => {
                write!(f, "budget of {} attempts exhausted", attempts)
            }
        }
    }
}

impl std::error::Error for RetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RetryError::Fatal(e) => Some(e),
            RetryError::Exhausted { last: Some(e), .. } => Some(e),
            RetryError::Exhausted { last: None, .. } => None,
        }
    }
}
