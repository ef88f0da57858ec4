//! Publisher implementation.

use tracing::{info, warn};

use super::{PageApi, PublishOutcome};
use crate::document::LocalDocument;
use crate::error::ConfluenceError;

/// Publishes local documents to Confluence.
pub struct Publisher<'a, A: PageApi> {
    api: &'a A,
    parent_id: Option<String>,
}

impl<'a, A: PageApi> Publisher<'a, A> {
    /// Create a publisher that creates pages at the space root.
    #[must_use]
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            parent_id: None,
        }
    }

    /// Create new pages under this parent page.
    ///
    /// Only applies to creation; updates leave the page where it is.
    #[must_use]
    pub fn with_parent_id(mut self, parent_id: Option<String>) -> Self {
        self.parent_id = parent_id;
        self
    }

    /// Create the page, or update it if the title is already taken.
    ///
    /// # Errors
    ///
    /// Returns the create error when it isn't a duplicate-title rejection, or
    /// the update error when the fallback update fails.
    pub fn publish(&self, document: &LocalDocument) -> Result<PublishOutcome, ConfluenceError> {
        let created =
            self.api
                .create_page(&document.title, &document.html, self.parent_id.as_deref());

        match created {
            Ok(id) => Ok(PublishOutcome::Created { id }),
            Err(err) if err.is_duplicate_title() => {
                info!(
                    "Page '{}' already exists, updating it instead",
                    document.title
                );
                match self.api.update_page(&document.title, &document.html)? {
                    Some(page) => Ok(PublishOutcome::Updated(Box::new(page))),
                    None => {
                        warn!("Page '{}' was neither created nor updated", document.title);
                        Ok(PublishOutcome::Unresolved)
                    }
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Delete the page with this title. Returns whether a page was deleted.
    pub fn unpublish(&self, title: &str) -> Result<bool, ConfluenceError> {
        self.api.delete_page(title)
    }
}
