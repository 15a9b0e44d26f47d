//! Top-level reachability check: URL validation plus the bounded retry loop.

use crate::probe::Transport;
use crate::retry::{run_with_retry_sleep, ProbeError, RetryError, RetryPolicy};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Overall failure of a reachability check. Both variants carry the URL so
/// the CLI's exit message can name the target.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The URL never made it to the network: unparseable or a scheme the
    /// probe cannot speak. Never retried.
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// The probe ran and failed, either fatally or by exhausting the budget.
    #[error("URL `{url}` is not reachable: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: RetryError,
    },
}

/// Polls `url` until it answers HTTP 200 or the policy's budget runs out.
///
/// Validation happens before the first request, so a malformed URL costs
/// zero network traffic and zero pauses.
pub fn check_reachable(
    url: &str,
    policy: &RetryPolicy,
    transport: &mut dyn Transport,
) -> Result<(), CheckError> {
    check_reachable_sleep(url, policy, transport, std::thread::sleep)
}

/// Like [`check_reachable`] but with an injectable sleep for tests.
pub fn check_reachable_sleep<S>(
    url: &str,
    policy: &RetryPolicy,
    transport: &mut dyn Transport,
    sleep: S,
) -> Result<(), CheckError>
where
    S: FnMut(Duration),
{
    let target = parse_target(url)?;
    let attempts = run_with_retry_sleep(policy, || probe_once(transport, &target), sleep)
        .map_err(|source| CheckError::Unreachable {
            url: url.to_string(),
            source,
        })?;
    tracing::info!("{} answered HTTP 200 on attempt {}", url, attempts);
    Ok(())
}

/// One GET: only a 200 counts as reachable.
fn probe_once(transport: &mut dyn Transport, target: &Url) -> Result<(), ProbeError> {
    match transport.get_status(target)? {
        200 => Ok(()),
        code => Err(ProbeError::Http(code)),
    }
}

fn parse_target(raw: &str) -> Result<Url, CheckError> {
    let url = Url::parse(raw).map_err(|e| CheckError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CheckError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme `{}`", other),
        }),
    }
}
