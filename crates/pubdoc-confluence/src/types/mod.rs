//! Confluence Cloud v2 API types.
//!
//! Response types are partial projections of the API schema: only fields
//! pubdoc reads are modeled and unknown fields are ignored.

mod error;
mod page;
mod request;

pub use error::{ApiErrorBody, ApiErrorEntry};
pub use page::{
    Collection, CollectionMeta, CreatedPage, Label, Page, PageBody, PageLinks, PageSummary,
    PagesResponse, PaginationLinks, Storage, Version,
};
pub use request::{BodyFormat, BodyWrite, CreatePageRequest, UpdatePageRequest, VersionWrite};
