//! Classify curl errors and HTTP statuses into retry policy error kinds.

use crate::retry::error::ProbeError;
use crate::retry::policy::ErrorKind;

/// Classify an HTTP status code for retry decisions.
///
/// Only 200 counts as reachable, and 200 never reaches classification; every
/// other status is treated as transient so a service that is still warming
/// up (404 behind a proxy, 502/503 from a balancer) consumes budget instead
/// of looping forever.
pub fn classify_http_status(code: u16) -> ErrorKind {
    ErrorKind::HttpStatus(code)
}

/// Classify a curl error for retry decisions.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}

/// Classify a probe error (curl or HTTP) into an ErrorKind.
pub fn classify(e: &ProbeError) -> ErrorKind {
    match e {
        ProbeError::Curl(ce) => classify_curl_error(ce),
        ProbeError::Http(code) => classify_http_status(*code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_non_200_status_is_retryable() {
        assert_eq!(classify_http_status(404), ErrorKind::HttpStatus(404));
        assert_eq!(classify_http_status(503), ErrorKind::HttpStatus(503));
        assert_eq!(classify_http_status(301), ErrorKind::HttpStatus(301));
    }

    #[test]
    fn curl_timeout_classified_as_timeout() {
        // 28 = CURLE_OPERATION_TIMEDOUT
        let e = curl::Error::new(28);
        assert_eq!(classify_curl_error(&e), ErrorKind::Timeout);
    }

    #[test]
    fn curl_connection_failures_classified_as_connection() {
        // 6 = CURLE_COULDNT_RESOLVE_HOST, 7 = CURLE_COULDNT_CONNECT
        assert_eq!(classify_curl_error(&curl::Error::new(6)), ErrorKind::Connection);
        assert_eq!(classify_curl_error(&curl::Error::new(7)), ErrorKind::Connection);
    }

    #[test]
    fn curl_unsupported_protocol_is_other() {
        // 1 = CURLE_UNSUPPORTED_PROTOCOL
        assert_eq!(classify_curl_error(&curl::Error::new(1)), ErrorKind::Other);
    }

    #[test]
    fn probe_error_dispatch() {
        assert_eq!(
            classify(&ProbeError::Http(502)),
            ErrorKind::HttpStatus(502)
        );
        assert_eq!(
            classify(&ProbeError::Curl(curl::Error::new(7))),
            ErrorKind::Connection
        );
    }
}
