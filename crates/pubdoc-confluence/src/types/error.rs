//! Confluence error response body.

use serde::Deserialize;

/// Error body returned by the v2 API on 4xx/5xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    /// Individual errors.
    #[serde(default)]
    pub errors: Vec<ApiErrorEntry>,
    /// Single message used by some gateway and v1-style responses.
    #[serde(default)]
    pub message: Option<String>,
}

/// One entry of [`ApiErrorBody::errors`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorEntry {
    /// HTTP status repeated in the body.
    #[serde(default)]
    pub status: Option<u16>,
    /// Machine-readable error code, e.g. `BAD_REQUEST`.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable summary.
    #[serde(default)]
    pub title: Option<String>,
    /// Additional detail.
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiErrorBody {
    /// Whether the body carried any recognizable error information.
    #[must_use]
    pub fn is_structured(&self) -> bool {
        !self.errors.is_empty() || self.message.is_some()
    }

    /// All message texts in the body.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .flat_map(|e| [e.code.as_deref(), e.title.as_deref(), e.detail.as_deref()])
            .chain(std::iter::once(self.message.as_deref()))
            .flatten()
    }
}
