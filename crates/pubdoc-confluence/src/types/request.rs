//! Request bodies sent to the Confluence API.

use serde::Serialize;

/// Body of `POST /pages`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest<'a> {
    /// Target space ID.
    pub space_id: &'a str,
    /// Page status.
    pub status: &'a str,
    /// Page title.
    pub title: &'a str,
    /// Parent page ID; the space homepage when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<&'a str>,
    /// Page content.
    pub body: BodyWrite<'a>,
}

/// Body of `PUT /pages/{id}`.
#[derive(Debug, Serialize)]
pub struct UpdatePageRequest<'a> {
    /// Page ID.
    pub id: &'a str,
    /// Page status.
    pub status: &'a str,
    /// Page title.
    pub title: &'a str,
    /// Page content.
    pub body: BodyWrite<'a>,
    /// New version.
    pub version: VersionWrite<'a>,
}

/// Page content in a given representation.
#[derive(Debug, Serialize)]
pub struct BodyWrite<'a> {
    /// Representation name.
    pub representation: &'a str,
    /// Content.
    pub value: &'a str,
}

impl<'a> BodyWrite<'a> {
    /// Content in storage representation.
    #[must_use]
    pub fn storage(value: &'a str) -> Self {
        Self {
            representation: "storage",
            value,
        }
    }
}

/// Version to create on update.
#[derive(Debug, Serialize)]
pub struct VersionWrite<'a> {
    /// Must be exactly one more than the current version.
    pub number: u32,
    /// Version comment shown in page history.
    pub message: &'a str,
}

/// Body representation requested from list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    /// Confluence storage format (XHTML).
    Storage,
    /// Atlassian document format (JSON).
    AtlasDocFormat,
}

impl BodyFormat {
    /// Query parameter value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::AtlasDocFormat => "atlas_doc_format",
        }
    }
}
