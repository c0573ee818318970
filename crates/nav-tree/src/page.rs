//! Page data returned by tree sources.

use std::fmt;

/// Stable identifier for a page within one tree source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the site's page hierarchy.
///
/// Pages are plain data handed out by a [`TreeSource`](crate::TreeSource).
/// The menu layer never mutates them and never holds them across calls.
///
/// `show_in_menus` is a contract with the source rather than something the
/// menu layer re-checks: sources list only pages that have it set. It is
/// kept on the struct so sources backed by a full page store can filter on
/// it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Identifier, unique within the source.
    pub id: PageId,
    /// Page title.
    pub title: String,
    /// Navigation label. Falls back to `title` when unset.
    pub menu_title: Option<String>,
    /// Link target, already resolved to a URL path.
    pub link: String,
    /// Parent page, `None` for top-level pages.
    pub parent: Option<PageId>,
    /// Whether the page itself appears in menus.
    pub show_in_menus: bool,
    /// Whether the page's children may appear in nested menus.
    pub show_children_in_menus: bool,
    /// Page type tag (e.g. "guide", "stacked-list"). Used by exclusion
    /// rules in the menu layer.
    pub page_type: Option<String>,
}

impl Page {
    /// Create a top-level page with both menu flags enabled.
    #[must_use]
    pub fn new(id: PageId, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            menu_title: None,
            link: link.into(),
            parent: None,
            show_in_menus: true,
            show_children_in_menus: true,
            page_type: None,
        }
    }

    /// Set the parent page.
    #[must_use]
    pub fn with_parent(mut self, parent: PageId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Set a navigation label distinct from the title.
    #[must_use]
    pub fn with_menu_title(mut self, menu_title: impl Into<String>) -> Self {
        self.menu_title = Some(menu_title.into());
        self
    }

    /// Set the page type tag.
    #[must_use]
    pub fn with_page_type(mut self, page_type: impl Into<String>) -> Self {
        self.page_type = Some(page_type.into());
        self
    }

    /// Override whether the page appears in menus.
    #[must_use]
    pub fn with_show_in_menus(mut self, show: bool) -> Self {
        self.show_in_menus = show;
        self
    }

    /// Override whether the page's children appear in nested menus.
    #[must_use]
    pub fn with_show_children_in_menus(mut self, show: bool) -> Self {
        self.show_children_in_menus = show;
        self
    }

    /// The label to display in a menu: `menu_title` if set, else `title`.
    #[must_use]
    pub fn menu_label(&self) -> &str {
        self.menu_title.as_deref().unwrap_or(&self.title)
    }
}
