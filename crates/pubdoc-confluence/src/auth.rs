//! HTTP basic authentication for Confluence Cloud.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use pubdoc_config::Credentials;

/// Precomputed `Authorization` header value (internal use only).
pub(crate) struct BasicAuth {
    header: String,
}

impl BasicAuth {
    /// Encode `username:api_key` once per client.
    pub(crate) fn new(credentials: &Credentials) -> Self {
        let token = STANDARD.encode(format!(
            "{}:{}",
            credentials.username, credentials.api_key
        ));
        Self {
            header: format!("Basic {token}"),
        }
    }

    /// `Authorization` header value.
    pub(crate) fn header(&self) -> &str {
        &self.header
    }
}
