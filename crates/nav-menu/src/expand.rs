//! The recursive filter/classify/expand pass over sibling sets.

use nav_tree::{Page, TreeSource};

use crate::config::MenuConfig;
use crate::context::NavContext;
use crate::filter::VisibilityFilter;
use crate::item::MenuItem;
use crate::menu::MenuError;

/// Borrowed view of everything one render call needs while recursing.
pub(crate) struct Expander<'a> {
    pub source: &'a dyn TreeSource,
    pub filter: &'a dyn VisibilityFilter,
    pub config: &'a MenuConfig,
    pub context: &'a NavContext,
}

impl Expander<'_> {
    /// Turn an ordered sibling set into menu items, recursing into each
    /// page that is an open section.
    ///
    /// `nesting_level` is 1-based and counts depth within this render
    /// call, independent of where in the site tree the call started.
    /// Sibling order is preserved; nothing is reordered.
    pub(crate) fn expand(
        &self,
        siblings: Vec<Page>,
        nesting_level: usize,
        max_depth: Option<usize>,
    ) -> Result<Vec<MenuItem>, MenuError> {
        if nesting_level > self.config.recursion_limit {
            tracing::warn!(
                limit = self.config.recursion_limit,
                "menu nesting exceeded the recursion limit, page tree is likely cyclic"
            );
            return Err(MenuError::RecursionLimit {
                limit: self.config.recursion_limit,
            });
        }

        let mut kept = Vec::with_capacity(siblings.len());
        for page in siblings {
            if !self.parent_type_excluded(&page)? {
                kept.push(page);
            }
        }

        let last = kept.len().saturating_sub(1);
        let mut items = Vec::with_capacity(kept.len());

        for (index, page) in kept.into_iter().enumerate() {
            let mut classes = Vec::new();
            if index == 0 {
                classes.push("first".to_owned());
            }
            if index == last {
                classes.push("last".to_owned());
            }
            classes.push(self.context.linking_mode(&page).as_class().to_owned());

            let mut children = Vec::new();
            if page.show_children_in_menus
                && self.context.is_section(&page)
                && max_depth.is_none_or(|depth| nesting_level < depth)
            {
                let visible = self.filter.filter(self.source.children_of(&page)?);

                // A section whose children all got filtered away renders
                // as a plain leaf, with no "open" class.
                if !visible.is_empty() {
                    classes.push("open".to_owned());
                    children = self.expand(visible, nesting_level + 1, max_depth)?;
                }
            }

            items.push(MenuItem {
                title: page.menu_label().to_owned(),
                link: page.link,
                classes,
                children,
            });
        }

        Ok(items)
    }

    /// Whether the page's parent carries a type tag whose children are
    /// kept out of menus.
    fn parent_type_excluded(&self, page: &Page) -> Result<bool, MenuError> {
        if self.config.excluded_parent_types.is_empty() {
            return Ok(false);
        }
        let Some(parent) = self.source.parent_of(page)? else {
            return Ok(false);
        };
        Ok(parent
            .page_type
            .as_deref()
            .is_some_and(|tag| self.config.excluded_parent_types.contains(tag)))
    }
}
