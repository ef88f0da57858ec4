//! Title lookup resolution shared by update and delete.

use crate::types::PageSummary;

/// Result of looking a page up by title.
///
/// Titles are only unique by convention, so a lookup can match several pages.
/// Callers must refuse to act on anything but [`PageLookup::Unique`].
#[derive(Debug)]
pub enum PageLookup {
    /// No page has the title.
    Missing,
    /// More than one page has the title.
    Ambiguous(usize),
    /// Exactly one page has the title.
    Unique(Box<PageSummary>),
}

impl PageLookup {
    /// Resolve lookup results into a single page, if there is exactly one.
    #[must_use]
    pub fn resolve(mut results: Vec<PageSummary>) -> Self {
        if results.len() > 1 {
            return Self::Ambiguous(results.len());
        }
        match results.pop() {
            Some(page) => Self::Unique(Box::new(page)),
            None => Self::Missing,
        }
    }
}
