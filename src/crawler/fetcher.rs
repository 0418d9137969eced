//! HTTP fetch adapter
//!
//! This module performs the single-GET fetches used by the crawler and the
//! product extractor. Every outcome is surfaced as a typed [`FetchResult`];
//! the traversal engine only distinguishes success from failure and never
//! inspects error internals.

use crate::config::{FetchConfig, UserAgentConfig};
use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The fetch failed; the node is skipped, never retried
    Failed {
        /// What went wrong
        failure: FetchFailure,
    },
}

impl FetchResult {
    /// Returns the body if this result is a success
    pub fn body(self) -> Option<String> {
        match self {
            FetchResult::Success { body, .. } => Some(body),
            FetchResult::Failed { .. } => None,
        }
    }
}

/// Classified fetch failure
///
/// The crawler treats all variants identically (skip the node); the
/// distinction exists for logging.
#[derive(Debug, thiserror::Error)]
pub enum FetchFailure {
    #[error("request timeout")]
    Timeout,

    #[error("connection error")]
    Connect,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("{0}")]
    Other(String),
}

/// Builds an HTTP client with the identifying user agent and timeouts
///
/// # Arguments
///
/// * `fetch` - Fetch behavior configuration (timeout)
/// * `user_agent` - User agent identification configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use fitground::config::{FetchConfig, UserAgentConfig};
/// use fitground::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default(), &UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    fetch: &FetchConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(fetch.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a single GET, classifying every failure
///
/// Non-2xx statuses, timeouts, and connection errors all come back as
/// [`FetchResult::Failed`]. There is no retry.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();

            if !status.is_success() {
                return FetchResult::Failed {
                    failure: FetchFailure::Status(status.as_u16()),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::Failed {
                    failure: FetchFailure::Other(e.to_string()),
                },
            }
        }
        Err(e) => {
            let failure = if e.is_timeout() {
                FetchFailure::Timeout
            } else if e.is_connect() {
                FetchFailure::Connect
            } else {
                FetchFailure::Other(e.to_string())
            };
            FetchResult::Failed { failure }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&FetchConfig::default(), &UserAgentConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_header_value() {
        let ua = UserAgentConfig::default();
        assert_eq!(
            ua.header_value(),
            "FitGroundBot/1.0 (+https://github.com/FitGround)"
        );
    }

    #[test]
    fn test_body_accessor() {
        let success = FetchResult::Success {
            status_code: 200,
            body: "hello".to_string(),
        };
        assert_eq!(success.body(), Some("hello".to_string()));

        let failed = FetchResult::Failed {
            failure: FetchFailure::Timeout,
        };
        assert_eq!(failed.body(), None);
    }

    // Network behavior (timeouts, HTTP errors, connection failures) is
    // covered by the wiremock integration tests.
}
