//! Create-or-update publishing for Confluence.
//!
//! This module provides the [`Publisher`] that pushes a rendered
//! [`LocalDocument`](crate::LocalDocument) into the configured space:
//!
//! 1. Try to create a page with the document's title
//! 2. If Confluence reports the title is taken, update that page instead
//! 3. Report whether the page was created, updated, or left alone
//!
//! This is a two-phase upsert without atomicity. Two publishers racing on the
//! same title can both create a page, after which updates by title are refused
//! as ambiguous.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use pubdoc_config::Config;
//! use pubdoc_confluence::{ConfluenceClient, LocalDocument, PublishOutcome, Publisher};
//! use pubdoc_renderer::MarkdownRenderer;
//!
//! let client = ConfluenceClient::from_config(&Config::from_env());
//! let document = LocalDocument::from_markdown("Notes", "# Notes", &MarkdownRenderer::new());
//!
//! match Publisher::new(&client).publish(&document)? {
//!     PublishOutcome::Created { id } => println!("created {id}"),
//!     PublishOutcome::Updated(page) => println!("updated {}", page.summary.id),
//!     PublishOutcome::Unresolved => println!("nothing changed"),
//! }
//! # Ok(())
//! # }
//! ```

mod executor;

pub use executor::Publisher;

use crate::client::ConfluenceClient;
use crate::error::ConfluenceError;
use crate::types::Page;

/// Page operations the publisher needs.
///
/// Implemented by [`ConfluenceClient`]; tests substitute a fake.
pub trait PageApi {
    /// Create a page and return its ID.
    fn create_page(
        &self,
        title: &str,
        html: &str,
        parent_id: Option<&str>,
    ) -> Result<String, ConfluenceError>;

    /// Update the single page with this title, `None` if there isn't exactly one.
    fn update_page(&self, title: &str, html: &str) -> Result<Option<Page>, ConfluenceError>;

    /// Delete the single page with this title, `false` if there isn't exactly one.
    fn delete_page(&self, title: &str) -> Result<bool, ConfluenceError>;
}

impl PageApi for ConfluenceClient {
    fn create_page(
        &self,
        title: &str,
        html: &str,
        parent_id: Option<&str>,
    ) -> Result<String, ConfluenceError> {
        ConfluenceClient::create_page(self, title, html, parent_id)
    }

    fn update_page(&self, title: &str, html: &str) -> Result<Option<Page>, ConfluenceError> {
        ConfluenceClient::update_page(self, title, html)
    }

    fn delete_page(&self, title: &str) -> Result<bool, ConfluenceError> {
        ConfluenceClient::delete_page(self, title)
    }
}

/// Result of [`Publisher::publish`].
#[derive(Debug)]
pub enum PublishOutcome {
    /// A new page was created.
    Created {
        /// ID of the new page.
        id: String,
    },
    /// An existing page with the same title was updated.
    Updated(Box<Page>),
    /// The title was taken but no single page could be resolved for update.
    Unresolved,
}

impl PublishOutcome {
    /// ID of the created or updated page.
    #[must_use]
    pub fn page_id(&self) -> Option<&str> {
        match self {
            Self::Created { id } => Some(id),
            Self::Updated(page) => Some(&page.summary.id),
            Self::Unresolved => None,
        }
    }
}
