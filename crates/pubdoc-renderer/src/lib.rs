//! Markdown to HTML rendering for Confluence pages.
//!
//! Converts markdown into HTML suitable for the Confluence "storage" body
//! representation. Rendering is a pure function of its input:
//!
//! - Headings get automatic `id` anchors derived from their text
//! - External links open in a new tab (`target="_blank"`)
//! - Tables, strikethrough, footnotes, task lists, definition lists and
//!   smart punctuation are enabled
//!
//! # Example
//!
//! ```
//! use pubdoc_renderer::MarkdownRenderer;
//!
//! let html = MarkdownRenderer::new().render("# Hello\n\nSee [docs](https://example.com).");
//! assert!(html.contains(r#"<h1 id="hello">Hello</h1>"#));
//! assert!(html.contains(r#"target="_blank""#));
//! ```

mod renderer;
mod state;

pub use renderer::{MarkdownRenderer, markdown_to_html};
pub use state::{escape_html, slugify};
