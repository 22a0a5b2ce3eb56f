// src/core/net.rs
// Blocking HTTP GET. One request in flight at a time.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{ Error, Result };

/// Anything that can turn a URL into a response body.
/// The runner only ever talks to this, so tests can swap in canned pages.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(&self, url: &str) -> Result<String> {
        (**self).get(url)
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// `timeout = None` waits forever, like a plain `requests.get`.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| Error::Http { url: url.to_string(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url: url.to_string(), status: status.as_u16() });
        }

        resp.text().map_err(|source| Error::Http { url: url.to_string(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_and_without_timeout() {
        assert!(HttpFetcher::new(None).is_ok());
        assert!(HttpFetcher::new(Some(Duration::from_secs(5))).is_ok());
    }

    #[test]
    fn status_error_names_the_url() {
        let err = Error::Status { url: "https://ts.test/x".to_string(), status: 503 };
        assert_eq!(err.to_string(), "HTTP 503 from https://ts.test/x");
    }
}
