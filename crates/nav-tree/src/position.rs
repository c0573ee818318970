//! Resolving where in the tree a menu starts.
//!
//! A menu can start at any level of the hierarchy. Level 1 is the set of
//! top-level pages; level N is the children of the current page's ancestor
//! N-2 steps below the root. The resolution walks parent references upward
//! instead of indexing into the tree, so it works against any
//! [`TreeSource`] backend.

use std::collections::HashSet;

use crate::page::Page;
use crate::source::{TreeError, TreeSource};

/// Chain of pages from the top-level ancestor down to `page` itself.
///
/// Built by chasing parent references upward, then reversed. The walk
/// tracks visited ids and fails with [`TreeError::ParentCycle`] when a
/// page repeats, since a cycle would otherwise never terminate.
///
/// # Errors
///
/// Returns [`TreeError::ParentCycle`] on cyclic parent data and propagates
/// any [`TreeError::Store`] from the source.
pub fn ancestor_chain(source: &dyn TreeSource, page: &Page) -> Result<Vec<Page>, TreeError> {
    let mut seen = HashSet::from([page.id]);
    let mut chain = vec![page.clone()];

    let mut cursor = page.clone();
    while let Some(parent) = source.parent_of(&cursor)? {
        if !seen.insert(parent.id) {
            tracing::warn!(page = %parent.id, "parent references form a cycle");
            return Err(TreeError::ParentCycle(parent.id));
        }
        chain.push(parent.clone());
        cursor = parent;
    }

    chain.reverse();
    Ok(chain)
}

/// The ordered set of sibling pages a menu at `level` starts from.
///
/// Level 1 is [`TreeSource::root_pages`]. For deeper levels the starting
/// set is found through `current`: the children of its ancestor at depth
/// `level - 1`. When the current page sits higher in the tree than the
/// requested level, or there is no current page at all, the result is
/// empty rather than an error. A menu that has nothing to show is a normal
/// condition.
///
/// `level` counts from 1; passing 0 is a caller bug and is rejected by the
/// menu layer before this is reached.
///
/// # Errors
///
/// Propagates [`TreeError`] from the source, including parent cycles
/// detected while building the ancestor chain.
pub fn pages_for_level(
    source: &dyn TreeSource,
    level: usize,
    current: Option<&Page>,
) -> Result<Vec<Page>, TreeError> {
    debug_assert!(level >= 1, "menu levels count from 1");

    if level == 1 {
        return source.root_pages();
    }

    let Some(current) = current else {
        return Ok(Vec::new());
    };

    let chain = ancestor_chain(source, current)?;
    match chain.get(level - 2) {
        Some(ancestor) => source.children_of(ancestor),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::mock::MockTree;
    use crate::page::PageId;

    fn titles(pages: &[Page]) -> Vec<&str> {
        pages.iter().map(|p| p.title.as_str()).collect()
    }

    /// Home, About Us (with two children), Contact Us.
    fn sample_tree() -> MockTree {
        MockTree::new()
            .with_page(Page::new(PageId(1), "Home", "/"))
            .with_page(Page::new(PageId(2), "About Us", "/about-us/"))
            .with_page(Page::new(PageId(3), "Contact Us", "/contact-us/"))
            .with_page(
                Page::new(PageId(4), "Our Staff", "/about-us/our-staff/").with_parent(PageId(2)),
            )
            .with_page(
                Page::new(PageId(5), "Another Page", "/about-us/another-page/")
                    .with_parent(PageId(2)),
            )
    }

    #[test]
    fn test_level_one_is_root_pages() {
        let tree = sample_tree();

        let pages = pages_for_level(&tree, 1, None).unwrap();

        assert_eq!(titles(&pages), vec!["Home", "About Us", "Contact Us"]);
    }

    #[test]
    fn test_level_one_ignores_current_page() {
        let tree = sample_tree();
        let staff = tree.get(PageId(4)).unwrap();

        let pages = pages_for_level(&tree, 1, Some(&staff)).unwrap();

        assert_eq!(titles(&pages), vec!["Home", "About Us", "Contact Us"]);
    }

    #[test]
    fn test_level_two_from_child_page() {
        let tree = sample_tree();
        let staff = tree.get(PageId(4)).unwrap();

        let pages = pages_for_level(&tree, 2, Some(&staff)).unwrap();

        assert_eq!(titles(&pages), vec!["Our Staff", "Another Page"]);
    }

    #[test]
    fn test_level_two_from_section_root() {
        let tree = sample_tree();
        let about = tree.get(PageId(2)).unwrap();

        let pages = pages_for_level(&tree, 2, Some(&about)).unwrap();

        assert_eq!(titles(&pages), vec!["Our Staff", "Another Page"]);
    }

    #[test]
    fn test_level_beyond_tree_depth_is_empty() {
        let tree = sample_tree();
        let staff = tree.get(PageId(4)).unwrap();

        let pages = pages_for_level(&tree, 5, Some(&staff)).unwrap();

        assert!(pages.is_empty());
    }

    #[test]
    fn test_deep_level_without_current_page_is_empty() {
        let tree = sample_tree();

        let pages = pages_for_level(&tree, 2, None).unwrap();

        assert!(pages.is_empty());
    }

    #[test]
    fn test_ancestor_chain_runs_root_first() {
        let tree = sample_tree();
        let staff = tree.get(PageId(4)).unwrap();

        let chain = ancestor_chain(&tree, &staff).unwrap();

        assert_eq!(titles(&chain), vec!["About Us", "Our Staff"]);
    }

    #[test]
    fn test_ancestor_chain_of_root_page_is_itself() {
        let tree = sample_tree();
        let home = tree.get(PageId(1)).unwrap();

        let chain = ancestor_chain(&tree, &home).unwrap();

        assert_eq!(titles(&chain), vec!["Home"]);
    }

    #[test]
    fn test_parent_cycle_detected() {
        let tree = MockTree::new()
            .with_page(Page::new(PageId(1), "A", "/a/").with_parent(PageId(2)))
            .with_page(Page::new(PageId(2), "B", "/b/").with_parent(PageId(1)));
        let a = tree.get(PageId(1)).unwrap();

        let result = ancestor_chain(&tree, &a);

        assert!(matches!(result, Err(TreeError::ParentCycle(_))));
    }

    #[test]
    fn test_dangling_parent_propagates_store_error() {
        let tree =
            MockTree::new().with_page(Page::new(PageId(1), "Lost", "/lost/").with_parent(PageId(99)));
        let lost = tree.get(PageId(1)).unwrap();

        let result = pages_for_level(&tree, 2, Some(&lost));

        assert!(matches!(result, Err(TreeError::Store(_))));
    }
}
