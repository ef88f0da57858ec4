//! Confluence page types.

use serde::{Deserialize, Serialize};

/// Body of a `200 OK` response to `POST /pages`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreatedPage {
    /// Page ID.
    pub id: String,
    /// Page title.
    pub title: String,
}

/// Body of a `200 OK` response to `GET /spaces/{id}/pages`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PagesResponse {
    /// Pages on this result page.
    #[serde(default)]
    pub results: Vec<PageSummary>,
    /// Pagination links.
    #[serde(rename = "_links", default)]
    pub links: Option<PaginationLinks>,
}

impl PagesResponse {
    /// Whether the server has more results than were returned.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.links.as_ref().is_some_and(|l| l.next.is_some())
    }
}

/// Pagination links of a list response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PaginationLinks {
    /// Relative URL of the next result page.
    #[serde(default)]
    pub next: Option<String>,
    /// Site base URL.
    #[serde(default)]
    pub base: Option<String>,
}

/// Page as listed in a space.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    /// Page ID.
    pub id: String,
    /// Page status ("current", "draft", ...).
    #[serde(default)]
    pub status: String,
    /// Page title.
    pub title: String,
    /// Owning space ID.
    #[serde(default)]
    pub space_id: String,
    /// Parent page ID.
    pub parent_id: Option<String>,
    /// Parent content type.
    pub parent_type: Option<String>,
    /// Position among siblings.
    pub position: Option<i64>,
    /// Account ID of the creator.
    pub author_id: Option<String>,
    /// Account ID of the owner.
    pub owner_id: Option<String>,
    /// Account ID of the previous owner.
    pub last_owner_id: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Current version.
    pub version: Version,
    /// Page body, when requested via `body-format`.
    pub body: Option<PageBody>,
    /// Hypermedia links.
    #[serde(rename = "_links")]
    pub links: Option<PageLinks>,
}

impl PageSummary {
    /// Storage-format body, or empty string when the body wasn't requested.
    #[must_use]
    pub fn storage_value(&self) -> &str {
        self.body
            .as_ref()
            .and_then(|b| b.storage.as_ref())
            .map_or("", |s| s.value.as_str())
    }
}

/// Full page as returned by `PUT /pages/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Fields shared with list results.
    #[serde(flatten)]
    pub summary: PageSummary,
    /// Page labels.
    pub labels: Option<Collection<Label>>,
    /// Version history.
    pub versions: Option<Collection<Version>>,
    /// Whether the authenticated user favorited the page.
    #[serde(default)]
    pub is_favorited_by_current_user: bool,
}

/// Page version.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Version number.
    pub number: u32,
    /// Version message/comment.
    pub message: Option<String>,
    /// Whether the edit was marked minor.
    #[serde(default)]
    pub minor_edit: bool,
    /// Account ID of the editor.
    pub author_id: Option<String>,
    /// Edit timestamp.
    pub created_at: Option<String>,
}

/// Page body in the requested representations.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PageBody {
    /// Storage format content.
    pub storage: Option<Storage>,
    /// Atlassian document format content, kept opaque.
    #[serde(rename = "atlas_doc_format")]
    pub atlas_doc_format: Option<serde_json::Value>,
}

/// Storage format representation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Storage {
    /// Content representation (always "storage").
    pub representation: String,
    /// HTML content in Confluence storage format.
    pub value: String,
}

/// Hypermedia links of a page.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PageLinks {
    /// Web UI link, relative to the site base.
    pub webui: Option<String>,
    /// Editor link.
    pub editui: Option<String>,
    /// Short link.
    pub tinyui: Option<String>,
    /// Site base URL.
    pub base: Option<String>,
}

/// Cursor-paginated sub-collection embedded in a page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Collection<T> {
    /// Items.
    #[serde(default)]
    pub results: Vec<T>,
    /// Pagination state.
    pub meta: Option<CollectionMeta>,
}

/// Pagination state of a [`Collection`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMeta {
    /// More items available.
    #[serde(default)]
    pub has_more: bool,
    /// Cursor for the next batch.
    pub cursor: Option<String>,
}

/// Page label.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Label {
    /// Label ID.
    pub id: String,
    /// Label name.
    pub name: String,
    /// Label prefix ("global", "my", ...).
    pub prefix: Option<String>,
}
