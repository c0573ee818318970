//! Request context: where the current page sits in the tree.

use std::collections::HashSet;

use nav_tree::{Page, PageId, TreeError, TreeSource, ancestor_chain};

/// How a page relates to the page the menu is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkingMode {
    /// The page is the current page.
    Current,
    /// The page is an ancestor of the current page.
    Section,
    /// Unrelated to the current page.
    Link,
}

impl LinkingMode {
    /// The CSS class emitted for this mode.
    #[must_use]
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Section => "section",
            Self::Link => "link",
        }
    }
}

/// Identity of the current page and its ancestors, resolved once per
/// render call.
///
/// Pages are classified against this instead of re-walking the tree for
/// every sibling.
#[derive(Debug, Clone, Default)]
pub struct NavContext {
    current: Option<PageId>,
    ancestors: HashSet<PageId>,
}

impl NavContext {
    /// Context for a render call with no current page. Every page
    /// classifies as a plain link and nothing is a section.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Resolve the context for `page` by walking its ancestor chain.
    ///
    /// # Errors
    ///
    /// Propagates [`TreeError`] from the source, including parent cycles.
    pub fn for_page(source: &dyn TreeSource, page: &Page) -> Result<Self, TreeError> {
        let chain = ancestor_chain(source, page)?;
        let ancestors = chain
            .iter()
            .map(|p| p.id)
            .filter(|id| *id != page.id)
            .collect();

        Ok(Self {
            current: Some(page.id),
            ancestors,
        })
    }

    /// Whether `page` is the current page or one of its ancestors.
    #[must_use]
    pub fn is_section(&self, page: &Page) -> bool {
        self.current == Some(page.id) || self.ancestors.contains(&page.id)
    }

    /// Classify `page` relative to the current page.
    #[must_use]
    pub fn linking_mode(&self, page: &Page) -> LinkingMode {
        if self.current == Some(page.id) {
            LinkingMode::Current
        } else if self.ancestors.contains(&page.id) {
            LinkingMode::Section
        } else {
            LinkingMode::Link
        }
    }
}
