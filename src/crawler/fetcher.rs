//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests of a discovery run, including:
//! - Building the HTTP client (certificate checks disabled, redirects followed)
//! - Primary and alternate header profiles
//! - The single alternate-profile retry of the main page fetch
//! - Classification of network failures

use crate::config::{FetchConfig, UserAgentConfig};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONNECTION, USER_AGENT};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use thiserror::Error;

/// Outcome of a fetch that produced an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFetchResult {
    /// Response body, possibly a soft-404 page
    pub html: String,
    pub status_code: u16,
    /// True for 2xx responses
    pub succeeded: bool,
}

/// A fetch that produced no usable HTTP response
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("Too many redirects from {url}")]
    RedirectLimit { url: String },

    #[error("HTTP error for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    fn classify(url: &str, error: reqwest::Error) -> Self {
        let url = url.to_string();
        if error.is_timeout() {
            FetchError::Timeout { url }
        } else if error.is_connect() {
            FetchError::Connect {
                url,
                message: error.to_string(),
            }
        } else if error.is_redirect() {
            FetchError::RedirectLimit { url }
        } else {
            FetchError::Http { url, source: error }
        }
    }
}

/// The simulated client identity a request is sent with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderProfile {
    /// Desktop browser identity
    Primary,
    /// Command-line client identity, used for the one retry
    Alternate,
}

/// HTTP fetcher shared by every stage of a run
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    primary: HeaderMap,
    alternate: HeaderMap,
    timeout: Duration,
    probe_timeout: Duration,
}

impl Fetcher {
    /// Builds a fetcher from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Fetcher)` - Successfully built fetcher
    /// * `Err(reqwest::Error)` - Failed to build the HTTP client
    pub fn new(fetch: &FetchConfig, agents: &UserAgentConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(fetch)?,
            primary: header_profile(&agents.primary),
            alternate: header_profile(&agents.alternate),
            timeout: fetch.timeout(),
            probe_timeout: fetch.probe_timeout(),
        })
    }

    /// Fetches a URL once with the primary profile and the standard timeout
    pub async fn fetch(&self, url: &str) -> Result<PageFetchResult, FetchError> {
        self.fetch_with(url, HeaderProfile::Primary, self.timeout)
            .await
    }

    /// Fetches a URL once with the primary profile and the short probe timeout
    pub async fn probe(&self, url: &str) -> Result<PageFetchResult, FetchError> {
        self.fetch_with(url, HeaderProfile::Primary, self.probe_timeout)
            .await
    }

    /// Fetches the main page of a site
    ///
    /// # Retry Logic
    ///
    /// | Condition | Action |
    /// |-----------|--------|
    /// | HTTP 2xx/3xx | Return |
    /// | HTTP 4xx/5xx | Retry once with the alternate profile, return that response |
    /// | Network error | Return the error, no retry |
    ///
    /// A persistent non-2xx response is returned with `succeeded == false`;
    /// its body may still carry content.
    pub async fn fetch_main(&self, url: &str) -> Result<PageFetchResult, FetchError> {
        let first = self.fetch_with(url, HeaderProfile::Primary, self.timeout).await?;
        if !is_client_or_server_error(first.status_code) {
            return Ok(first);
        }

        tracing::debug!(
            "{} returned {}, retrying with alternate headers",
            url,
            first.status_code
        );
        self.fetch_with(url, HeaderProfile::Alternate, self.timeout)
            .await
    }

    /// Sends a single GET request
    pub async fn fetch_with(
        &self,
        url: &str,
        profile: HeaderProfile,
        timeout: Duration,
    ) -> Result<PageFetchResult, FetchError> {
        let headers = match profile {
            HeaderProfile::Primary => self.primary.clone(),
            HeaderProfile::Alternate => self.alternate.clone(),
        };

        let response = self
            .client
            .get(url)
            .headers(headers)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| FetchError::classify(url, e))?;

        let status = response.status();
        let html = response
            .text()
            .await
            .map_err(|e| FetchError::classify(url, e))?;

        Ok(PageFetchResult {
            html,
            status_code: status.as_u16(),
            succeeded: status.is_success(),
        })
    }
}

/// Builds the HTTP client used for every request
///
/// Certificate verification is disabled: many small business and school
/// sites serve expired or self-signed certificates.
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(config.timeout())
        .connect_timeout(config.timeout())
        .redirect(Policy::limited(config.max_redirects))
        .danger_accept_invalid_certs(true)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Builds the request headers of one client identity
fn header_profile(user_agent: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(user_agent) {
        headers.insert(USER_AGENT, value);
    }
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers
}

fn is_client_or_server_error(status_code: u16) -> bool {
    (400..600).contains(&status_code)
}
