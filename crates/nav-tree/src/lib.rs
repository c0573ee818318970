//! Page tree abstraction for nested navigation menus.
//!
//! This crate provides the read-only view over a site's page hierarchy that
//! the `nav-menu` crate renders from. It enables:
//!
//! - **Unit testing** without a real content store
//! - **Backend flexibility** (CMS database, filesystem scanner, fixtures)
//! - **Clean separation** between tree traversal and menu rendering
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Page`] with the per-page navigation flags
//! - [`TreeSource`] trait with `root_pages()`, `children_of()`, and
//!   `parent_of()` methods
//! - [`ancestor_chain`] and [`pages_for_level`] for resolving where in the
//!   tree a menu should start
//! - [`MockTree`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use nav_tree::{MockTree, Page, PageId, TreeSource, pages_for_level};
//!
//! let tree = MockTree::new()
//!     .with_page(Page::new(PageId(1), "Home", "/"))
//!     .with_page(Page::new(PageId(2), "About Us", "/about-us/"));
//!
//! let roots = pages_for_level(&tree, 1, None).unwrap();
//! assert_eq!(roots.len(), 2);
//! ```

#[cfg(any(test, feature = "mock"))]
mod mock;
mod page;
mod position;
mod source;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockTree;
pub use page::{Page, PageId};
pub use position::{ancestor_chain, pages_for_level};
pub use source::{TreeError, TreeSource};
