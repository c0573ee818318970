//! Mock tree source for testing.
//!
//! Provides [`MockTree`] for unit testing without a real content store.

use crate::page::{Page, PageId};
use crate::source::{TreeError, TreeSource};

/// In-memory tree source for testing.
///
/// Holds pages in insertion order, which doubles as sibling display order.
/// Parent/child structure comes from each page's `parent` field.
///
/// # Example
///
/// ```
/// use nav_tree::{MockTree, Page, PageId, TreeSource};
///
/// let tree = MockTree::new()
///     .with_page(Page::new(PageId(1), "Home", "/"))
///     .with_page(Page::new(PageId(2), "Guide", "/guide/").with_parent(PageId(1)));
///
/// let home = tree.get(PageId(1)).unwrap();
/// let children = tree.children_of(&home).unwrap();
/// assert_eq!(children[0].title, "Guide");
/// ```
#[derive(Debug, Default)]
pub struct MockTree {
    pages: Vec<Page>,
}

impl MockTree {
    /// Create a new empty mock tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page. Siblings list in the order they were added.
    #[must_use]
    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    /// Look up a page by id.
    #[must_use]
    pub fn get(&self, id: PageId) -> Option<Page> {
        self.pages.iter().find(|p| p.id == id).cloned()
    }
}

impl TreeSource for MockTree {
    fn root_pages(&self) -> Result<Vec<Page>, TreeError> {
        Ok(self
            .pages
            .iter()
            .filter(|p| p.parent.is_none() && p.show_in_menus)
            .cloned()
            .collect())
    }

    fn children_of(&self, page: &Page) -> Result<Vec<Page>, TreeError> {
        Ok(self
            .pages
            .iter()
            .filter(|p| p.parent == Some(page.id) && p.show_in_menus)
            .cloned()
            .collect())
    }

    fn parent_of(&self, page: &Page) -> Result<Option<Page>, TreeError> {
        match page.parent {
            None => Ok(None),
            Some(id) => self
                .get(id)
                .map(Some)
                .ok_or_else(|| TreeError::store(format!("unknown page {id}"))),
        }
    }
}
