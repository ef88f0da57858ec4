//! Page operations for Confluence API.

use tracing::{debug, info, warn};

use super::{ConfluenceClient, read_body};
use crate::error::ConfluenceError;
use crate::lookup::PageLookup;
use crate::types::{
    BodyFormat, BodyWrite, CreatePageRequest, CreatedPage, Page, PageSummary, PagesResponse,
    UpdatePageRequest, VersionWrite,
};

/// Status written on every create and update.
const CURRENT_STATUS: &str = "current";

/// Version message recorded on updates.
const UPDATE_MESSAGE: &str = "pubdoc automated update";

/// Result limit for title lookups; anything above one match is ambiguous.
const LOOKUP_LIMIT: u32 = 10;

/// Filters for [`ConfluenceClient::get_pages_in_space`].
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    /// Only pages with this title.
    pub title: Option<String>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Include page bodies in this representation.
    pub body_format: Option<BodyFormat>,
}

impl PageQuery {
    /// Query pages by title.
    #[must_use]
    pub fn by_title(title: &str) -> Self {
        Self {
            title: Some(title.to_owned()),
            ..Self::default()
        }
    }

    /// Set the result limit.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Request page bodies in the given representation.
    #[must_use]
    pub fn with_body_format(mut self, format: BodyFormat) -> Self {
        self.body_format = Some(format);
        self
    }
}

impl ConfluenceClient {
    /// Create a page in the configured space and return its ID.
    ///
    /// No existence check is made first. If the title is taken Confluence
    /// rejects the request; see [`ConfluenceError::is_duplicate_title`].
    pub fn create_page(
        &self,
        title: &str,
        html: &str,
        parent_id: Option<&str>,
    ) -> Result<String, ConfluenceError> {
        let url = self.pages_url();

        let payload = CreatePageRequest {
            space_id: &self.space_id,
            status: CURRENT_STATUS,
            title,
            parent_id: parent_id.filter(|id| !id.is_empty()),
            body: BodyWrite::storage(html),
        };
        let payload_bytes = serde_json::to_vec(&payload)?;

        info!("Creating page '{}' in space {}", title, self.space_id);

        let response = self
            .agent
            .post(&url)
            .header("Authorization", self.auth.header())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])?;

        let body = read_body(response, 200)?;
        let created: CreatedPage = serde_json::from_str(&body)?;
        info!("Created page {} ('{}')", created.id, created.title);
        Ok(created.id)
    }

    /// List pages in the configured space.
    ///
    /// Only the first result page is returned. No matches is an empty list.
    pub fn get_pages_in_space(&self, query: &PageQuery) -> Result<PagesResponse, ConfluenceError> {
        let url = self.space_pages_url();

        let mut request = self
            .agent
            .get(&url)
            .header("Authorization", self.auth.header())
            .header("Accept", "application/json");

        if let Some(title) = query.title.as_deref().filter(|t| !t.is_empty()) {
            request = request.query("title", title);
        }
        if let Some(limit) = query.limit.filter(|l| *l > 0) {
            request = request.query("limit", limit.to_string());
        }
        if let Some(format) = query.body_format {
            request = request.query("body-format", format.as_str());
        }

        info!("Getting pages in space {}", self.space_id);

        let response = request.call()?;
        let body = read_body(response, 200)?;
        let pages: PagesResponse = serde_json::from_str(&body)?;

        debug!("Found {} pages in space {}", pages.results.len(), self.space_id);
        if pages.has_more() {
            debug!("More pages available; only the first result page is used");
        }
        Ok(pages)
    }

    /// Replace the content of the page with the given title.
    ///
    /// Returns `None` without error when no page or more than one page has the
    /// title. Otherwise the page is written as version `current + 1`.
    pub fn update_page(&self, title: &str, html: &str) -> Result<Option<Page>, ConfluenceError> {
        let Some(current) = self.find_unique_page(title, "update")? else {
            return Ok(None);
        };

        let url = self.page_url(&current.id);
        let next_version = current.version.number.checked_add(1).ok_or_else(|| {
            ConfluenceError::VersionLimit {
                page_id: current.id.clone(),
            }
        })?;

        let payload = UpdatePageRequest {
            id: &current.id,
            status: CURRENT_STATUS,
            title,
            body: BodyWrite::storage(html),
            version: VersionWrite {
                number: next_version,
                message: UPDATE_MESSAGE,
            },
        };
        let payload_bytes = serde_json::to_vec(&payload)?;

        info!(
            "Updating page {} from version {} to {}",
            current.id, current.version.number, next_version
        );

        let response = self
            .agent
            .put(&url)
            .header("Authorization", self.auth.header())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])?;

        let body = read_body(response, 200)?;
        let page: Page = serde_json::from_str(&body)?;
        info!(
            "Updated page {} to version {}",
            page.summary.id, page.summary.version.number
        );
        Ok(Some(page))
    }

    /// Delete the page with the given title.
    ///
    /// Returns `false` without error when no page or more than one page has
    /// the title; nothing is deleted in that case.
    pub fn delete_page(&self, title: &str) -> Result<bool, ConfluenceError> {
        let Some(current) = self.find_unique_page(title, "delete")? else {
            return Ok(false);
        };

        let url = self.page_url(&current.id);

        info!("Deleting page {} ('{}')", current.id, title);

        let response = self
            .agent
            .delete(&url)
            .header("Authorization", self.auth.header())
            .header("Accept", "application/json")
            .call()?;

        // 204 No Content: nothing to parse.
        read_body(response, 204)?;
        info!("Deleted page {}", current.id);
        Ok(true)
    }

    /// Look a page up by title and resolve it, warning when it can't be.
    ///
    /// An empty title never matches: the listing endpoint would ignore the
    /// filter and return arbitrary pages.
    fn find_unique_page(
        &self,
        title: &str,
        action: &str,
    ) -> Result<Option<Box<PageSummary>>, ConfluenceError> {
        if title.is_empty() {
            warn!("Cannot {action} page: title is empty");
            return Ok(None);
        }

        let pages = self.get_pages_in_space(&PageQuery::by_title(title).with_limit(LOOKUP_LIMIT))?;

        match PageLookup::resolve(pages.results) {
            PageLookup::Missing => {
                warn!("Cannot {action} page '{title}': no page with that title exists");
                Ok(None)
            }
            PageLookup::Ambiguous(count) => {
                warn!(
                    "Cannot {action} page '{title}': {count} pages share that title, refusing to guess"
                );
                Ok(None)
            }
            PageLookup::Unique(page) => Ok(Some(page)),
        }
    }
}
