//! Confluence publishing for pubdoc.
//!
//! This crate provides:
//! - [`ConfluenceClient`]: sync client for the four Confluence Cloud v2 page
//!   endpoints used by pubdoc, with basic authentication
//! - [`Publisher`]: create-or-update workflow for a rendered markdown file
//! - [`LocalDocument`] and [`format_title`]: turning a file path into a page
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use pubdoc_config::Config;
//! use pubdoc_confluence::{ConfluenceClient, LocalDocument, Publisher};
//! use pubdoc_renderer::MarkdownRenderer;
//!
//! let config = Config::load(None, None)?;
//! let client = ConfluenceClient::from_config(&config);
//! let document = LocalDocument::load(Path::new("README.md"), &MarkdownRenderer::new())?;
//!
//! let outcome = Publisher::new(&client).publish(&document)?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

mod auth;

// API client
mod client;
pub use client::{ConfluenceClient, PageQuery};

mod lookup;
pub use lookup::PageLookup;

// Local documents
mod document;
mod title;
pub use document::LocalDocument;
pub use title::format_title;

// Publishing workflow
pub mod publisher;
pub use publisher::{PageApi, PublishOutcome, Publisher};

// Wire types
pub mod types;

// Errors
pub mod error;
pub use error::{ApiErrorKind, ConfluenceError, DocumentError};
