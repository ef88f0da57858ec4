//! Local markdown documents ready for publishing.

use std::path::{Path, PathBuf};

use pubdoc_renderer::MarkdownRenderer;
use tracing::info;

use crate::error::DocumentError;
use crate::title::format_title;

/// A markdown file rendered to storage HTML.
#[derive(Debug, Clone)]
pub struct LocalDocument {
    /// Source file, if the document was loaded from disk.
    pub path: Option<PathBuf>,
    /// Page title.
    pub title: String,
    /// Rendered HTML body.
    pub html: String,
}

impl LocalDocument {
    /// Read and render a markdown file. The title is derived from the file name.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Read`] if the file cannot be opened or read.
    pub fn load(path: &Path, renderer: &MarkdownRenderer) -> Result<Self, DocumentError> {
        let markdown = std::fs::read(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let title = format_title(&path.to_string_lossy());
        let html = renderer.render(&String::from_utf8_lossy(&markdown));
        info!(
            "Rendered {} ({} bytes of HTML) as '{}'",
            path.display(),
            html.len(),
            title
        );

        Ok(Self {
            path: Some(path.to_path_buf()),
            title,
            html,
        })
    }

    /// Render in-memory markdown under the given title.
    #[must_use]
    pub fn from_markdown(title: impl Into<String>, markdown: &str, renderer: &MarkdownRenderer) -> Self {
        Self {
            path: None,
            title: title.into(),
            html: renderer.render(markdown),
        }
    }

    /// Replace the derived title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
