//! Fixed-delay retry over a fallible probe.
//!
//! This module encapsulates error classification (timeouts, connection
//! failures, unexpected HTTP statuses) and the bounded retry loop so the
//! checker and its tests share a consistent policy.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use error::{ProbeError, RetryError};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::{run_with_retry, run_with_retry_sleep};
