//! Visibility filtering of page sets.

use nav_tree::Page;

/// Drops pages the requester should not see.
///
/// Applied at two points: to the starting set of a render call and to each
/// page's children before they are expanded. Implementations decide on
/// access control, draft status, or whatever else the embedding
/// application cares about. The order of the surviving pages must be
/// preserved.
pub trait VisibilityFilter: Send + Sync {
    /// Return the pages that may appear, in their original order.
    fn filter(&self, pages: Vec<Page>) -> Vec<Page>;
}

/// Filter that keeps every page.
#[derive(Debug, Default)]
pub struct NullFilter;

impl VisibilityFilter for NullFilter {
    fn filter(&self, pages: Vec<Page>) -> Vec<Page> {
        pages
    }
}

#[cfg(test)]
mod tests {
    use nav_tree::{Page, PageId};

    use super::*;

    #[test]
    fn test_null_filter_keeps_everything() {
        let pages = vec![
            Page::new(PageId(1), "Home", "/"),
            Page::new(PageId(2), "About Us", "/about-us/"),
        ];

        let kept = NullFilter.filter(pages.clone());

        assert_eq!(kept, pages);
    }

    #[test]
    fn test_custom_filter_preserves_order() {
        struct DropDrafts;
        impl VisibilityFilter for DropDrafts {
            fn filter(&self, pages: Vec<Page>) -> Vec<Page> {
                pages.into_iter().filter(|p| !p.title.starts_with("Draft")).collect()
            }
        }

        let pages = vec![
            Page::new(PageId(1), "Home", "/"),
            Page::new(PageId(2), "Draft: Pricing", "/pricing/"),
            Page::new(PageId(3), "Contact Us", "/contact-us/"),
        ];

        let kept = DropDrafts.filter(pages);

        let titles: Vec<_> = kept.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Home", "Contact Us"]);
    }
}
