//! Menu rendering API.

use std::sync::Arc;

use nav_tree::{Page, TreeError, TreeSource, pages_for_level};

use crate::config::MenuConfig;
use crate::context::NavContext;
use crate::expand::Expander;
use crate::filter::{NullFilter, VisibilityFilter};
use crate::html::render_list;
use crate::item::MenuItem;

/// Error raised while building or rendering a menu.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// Menu levels count from 1.
    #[error("menu level must be at least 1, got {0}")]
    InvalidLevel(usize),

    /// Nesting went past the configured hard bound, which only happens
    /// when the child data loops back on itself.
    #[error("menu nesting exceeded {limit} levels, page tree is likely cyclic")]
    RecursionLimit {
        /// The configured bound.
        limit: usize,
    },

    /// Reading the page tree failed.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Renders nested navigation menus over a page tree.
///
/// Construction wires up the collaborators once; each call to
/// [`has_menu`](Self::has_menu), [`build`](Self::build), or
/// [`render`](Self::render) is an independent read-only traversal, so one
/// renderer can serve concurrent requests as long as its source and filter
/// can.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use nav_menu::MenuRenderer;
/// use nav_tree::{MockTree, Page, PageId};
///
/// let tree = MockTree::new()
///     .with_page(Page::new(PageId(1), "Home", "/"))
///     .with_page(Page::new(PageId(2), "About Us", "/about-us/"));
///
/// let renderer = MenuRenderer::new(Arc::new(tree));
/// let html = renderer.render(1, None, None)?;
/// assert!(html.starts_with("<ul class=\"nested-menu"));
/// # Ok::<(), nav_menu::MenuError>(())
/// ```
pub struct MenuRenderer {
    source: Arc<dyn TreeSource>,
    filter: Arc<dyn VisibilityFilter>,
    config: MenuConfig,
}

impl MenuRenderer {
    /// Create a renderer with the identity filter and default config.
    #[must_use]
    pub fn new(source: Arc<dyn TreeSource>) -> Self {
        Self {
            source,
            filter: Arc::new(NullFilter),
            config: MenuConfig::default(),
        }
    }

    /// Replace the visibility filter.
    #[must_use]
    pub fn with_filter(mut self, filter: Arc<dyn VisibilityFilter>) -> Self {
        self.filter = filter;
        self
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: MenuConfig) -> Self {
        self.config = config;
        self
    }

    /// Whether a menu starting at `level` would contain anything.
    ///
    /// Useful for wrapping extra markup (a `<nav>` element, a heading)
    /// around a menu only when one exists.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InvalidLevel`] for level 0 and propagates tree
    /// failures. A level deeper than the tree is not an error; the answer
    /// is simply `false`.
    pub fn has_menu(&self, level: usize, current: Option<&Page>) -> Result<bool, MenuError> {
        Ok(!self.starting_set(level, current)?.is_empty())
    }

    /// Build the menu item tree starting at `level`.
    ///
    /// `max_depth` bounds how many levels deep the menu nests, counted
    /// from the starting level; `None` leaves the depth bounded only by
    /// the tree itself. `current` is the page the menu is rendered for and
    /// drives current/section classification and child expansion.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InvalidLevel`] for level 0,
    /// [`MenuError::RecursionLimit`] for runaway nesting, and propagates
    /// tree failures.
    pub fn build(
        &self,
        level: usize,
        max_depth: Option<usize>,
        current: Option<&Page>,
    ) -> Result<Vec<MenuItem>, MenuError> {
        let siblings = self.starting_set(level, current)?;

        let context = match current {
            Some(page) => NavContext::for_page(&*self.source, page)?,
            None => NavContext::none(),
        };

        let expander = Expander {
            source: &*self.source,
            filter: &*self.filter,
            config: &self.config,
            context: &context,
        };
        expander.expand(siblings, 1, max_depth)
    }

    /// Render the menu starting at `level` as nested list markup.
    ///
    /// Produces an empty (but well-formed) list when nothing qualifies.
    ///
    /// # Errors
    ///
    /// Same conditions as [`build`](Self::build).
    pub fn render(
        &self,
        level: usize,
        max_depth: Option<usize>,
        current: Option<&Page>,
    ) -> Result<String, MenuError> {
        let items = self.build(level, max_depth, current)?;
        Ok(render_list(&items, level, 1, &self.config.item_template))
    }

    /// The filtered sibling set the menu starts from.
    fn starting_set(&self, level: usize, current: Option<&Page>) -> Result<Vec<Page>, MenuError> {
        if level < 1 {
            return Err(MenuError::InvalidLevel(level));
        }
        let pages = pages_for_level(&*self.source, level, current)?;
        Ok(self.filter.filter(pages))
    }
}
