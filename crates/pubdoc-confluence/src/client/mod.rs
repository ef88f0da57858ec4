//! Confluence REST API client.
//!
//! Provides a sync HTTP client for the Confluence Cloud v2 REST API with
//! basic authentication. Every call is a single request with a fixed timeout
//! and no retries.

mod pages;

pub use pages::PageQuery;

use std::time::Duration;

use pubdoc_config::{Config, Credentials};
use ureq::Agent;
use ureq::http::Response;

use crate::auth::BasicAuth;
use crate::error::ConfluenceError;

/// HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 10;

/// Confluence REST API client.
pub struct ConfluenceClient {
    agent: Agent,
    base_url: String,
    space_id: String,
    auth: BasicAuth,
}

impl ConfluenceClient {
    /// Create client from loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.api_base_url(),
            &config.space_id,
            &config.credentials,
        )
    }

    /// Create client for an explicit API base URL.
    ///
    /// # Arguments
    /// * `base_url` - v2 API root, e.g. `https://example.atlassian.net/wiki/api/v2`
    /// * `space_id` - Space that page lookups and creation target
    /// * `credentials` - Basic-auth username and API key
    #[must_use]
    pub fn new(base_url: &str, space_id: &str, credentials: &Credentials) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            space_id: space_id.to_owned(),
            auth: BasicAuth::new(credentials),
        }
    }

    /// Space this client targets.
    #[must_use]
    pub fn space_id(&self) -> &str {
        &self.space_id
    }

    /// Pages collection URL.
    fn pages_url(&self) -> String {
        format!("{}/pages", self.base_url)
    }

    /// Single page URL.
    fn page_url(&self, page_id: &str) -> String {
        format!("{}/pages/{}", self.base_url, page_id)
    }

    /// Pages-in-space collection URL.
    fn space_pages_url(&self) -> String {
        format!("{}/spaces/{}/pages", self.base_url, self.space_id)
    }
}

/// Read the whole response body, failing unless the status is exactly `expected`.
fn read_body(response: Response<ureq::Body>, expected: u16) -> Result<String, ConfluenceError> {
    let status = response.status().as_u16();
    let mut body_reader = response.into_body();

    if status != expected {
        let error_body = body_reader
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(ConfluenceError::HttpResponse {
            status,
            body: error_body,
        });
    }

    Ok(body_reader.read_to_string()?)
}
