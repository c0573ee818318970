//! Tree source trait and error type.

use crate::page::{Page, PageId};

/// Error raised while reading the page tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The underlying page store could not answer a query.
    #[error("page store unavailable: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Parent references loop back on themselves.
    #[error("parent references form a cycle at page {0}")]
    ParentCycle(PageId),
}

impl TreeError {
    /// Wrap a backend error as a store failure.
    #[must_use]
    pub fn store(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Store(source.into())
    }
}

/// Read-only view over a site's page hierarchy.
///
/// Implementations map whatever actually holds the pages (CMS database,
/// filesystem scanner, fixtures) onto ordered parent/child queries.
///
/// # Listing contract
///
/// `root_pages()` and `children_of()` return only pages with
/// `show_in_menus` set, in the site's display order. Callers rely on both
/// properties and do not re-check or re-sort.
pub trait TreeSource: Send + Sync {
    /// Top-level pages, in display order.
    fn root_pages(&self) -> Result<Vec<Page>, TreeError>;

    /// Children of a page, in display order.
    fn children_of(&self, page: &Page) -> Result<Vec<Page>, TreeError>;

    /// Parent of a page, `None` for top-level pages.
    ///
    /// Unlike the listing methods this does not filter on `show_in_menus`:
    /// a hidden page can still be the parent whose type tag matters.
    fn parent_of(&self, page: &Page) -> Result<Option<Page>, TreeError>;
}
