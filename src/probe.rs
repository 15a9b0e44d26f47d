//! HTTP GET reachability probing.
//!
//! Uses the curl crate (libcurl) to issue a GET, follow redirects, discard
//! the body, and report the final status code. The [`Transport`] trait is
//! the seam that lets the checker's tests script responses.

use crate::config::UrlwaitConfig;
use crate::retry::ProbeError;
use std::time::Duration;
use url::Url;

/// One GET against a URL, yielding the final HTTP status code.
pub trait Transport {
    fn get_status(&mut self, url: &Url) -> Result<u16, ProbeError>;
}

/// curl-backed transport used by the CLI.
#[derive(Debug, Clone, Copy)]
pub struct CurlTransport {
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl CurlTransport {
    pub fn new(cfg: &UrlwaitConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout(),
            request_timeout: cfg.request_timeout(),
        }
    }
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::new(&UrlwaitConfig::default())
    }
}

impl Transport for CurlTransport {
    fn get_status(&mut self, url: &Url) -> Result<u16, ProbeError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.request_timeout)?;

        {
            let mut transfer = easy.transfer();
            // Body is irrelevant; only the status matters.
            transfer.write_function(|data| Ok(data.len()))?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok(code as u16)
    }
}
