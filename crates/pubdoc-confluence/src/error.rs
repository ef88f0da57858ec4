//! Error types for Confluence publishing.

use std::path::PathBuf;

use crate::types::ApiErrorBody;

/// Text Confluence puts in the error message when a page title is taken.
///
/// Confluence has no dedicated error code for this condition, so matching on
/// the message is the only signal available. Expect it to break if Atlassian
/// rewords the message.
pub const DUPLICATE_TITLE_MARKER: &str = "title already exists";

/// Error from Confluence API operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfluenceError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] ureq::Error),

    /// Server answered with a status other than the expected one.
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Page version number cannot be incremented any further.
    #[error("page {page_id} is at the maximum version number")]
    VersionLimit {
        /// Page that could not be updated.
        page_id: String,
    },
}

/// Classification of a [`ConfluenceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// A page with the same title already exists in the space.
    DuplicateTitle,
    /// Credentials missing, wrong or lacking permission (401/403).
    Unauthorized,
    /// Space or page does not exist (404).
    NotFound,
    /// Network failure or timeout.
    Transport,
    /// Response body did not match the expected schema.
    Decode,
    /// Any other HTTP error status.
    Other,
}

impl ConfluenceError {
    /// Classify the error.
    ///
    /// Duplicate titles are detected from the structured error body on 400/409
    /// responses. Bodies that aren't in the Confluence error format fall back to
    /// a plain substring search.
    #[must_use]
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Transport(_) => ApiErrorKind::Transport,
            Self::Json(_) => ApiErrorKind::Decode,
            Self::VersionLimit { .. } => ApiErrorKind::Other,
            Self::HttpResponse { status, body } => {
                if reports_duplicate_title(*status, body) {
                    return ApiErrorKind::DuplicateTitle;
                }
                match status {
                    401 | 403 => ApiErrorKind::Unauthorized,
                    404 => ApiErrorKind::NotFound,
                    _ => ApiErrorKind::Other,
                }
            }
        }
    }

    /// Whether the error means the page title is already taken.
    #[must_use]
    pub fn is_duplicate_title(&self) -> bool {
        self.kind() == ApiErrorKind::DuplicateTitle
    }
}

fn reports_duplicate_title(status: u16, body: &str) -> bool {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if parsed.is_structured() => {
            matches!(status, 400 | 409) && parsed.messages().any(mentions_duplicate_title)
        }
        _ => mentions_duplicate_title(body),
    }
}

fn mentions_duplicate_title(text: &str) -> bool {
    text.to_ascii_lowercase().contains(DUPLICATE_TITLE_MARKER)
}

/// Error loading a local markdown document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Markdown file could not be opened or read.
    #[error("failed to read markdown file {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
