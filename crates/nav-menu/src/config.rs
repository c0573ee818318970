//! Menu rendering configuration.

use std::collections::HashSet;

/// The markup for a single item within the nested menu.
///
/// Substitution points:
/// - `{title}` the page's menu label, escaped
/// - `{link}` the page link, attribute-encoded
/// - `{classes}` the classes added to the list item (and also each anchor)
/// - `{children}` the markup for any nested sub-menu
pub const DEFAULT_ITEM_TEMPLATE: &str =
    r#"<li class="{classes}"><a class="{classes}" href="{link}">{title}</a>{children}</li>"#;

/// Fallback bound on nesting depth when no explicit maximum is given.
const DEFAULT_RECURSION_LIMIT: usize = 64;

/// Configuration for a [`MenuRenderer`](crate::MenuRenderer).
///
/// Each renderer owns its config, so renderers with different templates or
/// exclusion rules can coexist in one process.
#[derive(Debug, Clone)]
pub struct MenuConfig {
    /// Per-item markup template, see [`DEFAULT_ITEM_TEMPLATE`].
    pub item_template: String,
    /// Page type tags whose children never appear in the menu.
    pub excluded_parent_types: HashSet<String>,
    /// Hard bound on nesting depth. Exceeding it means the child data is
    /// malformed and rendering fails rather than recursing further.
    pub recursion_limit: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            item_template: DEFAULT_ITEM_TEMPLATE.to_owned(),
            excluded_parent_types: HashSet::from(["stacked-list".to_owned()]),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl MenuConfig {
    /// Replace the per-item markup template.
    #[must_use]
    pub fn with_item_template(mut self, template: impl Into<String>) -> Self {
        self.item_template = template.into();
        self
    }

    /// Replace the excluded page type tags.
    #[must_use]
    pub fn with_excluded_parent_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_parent_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the nesting depth bound.
    #[must_use]
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_has_all_substitution_points() {
        let config = MenuConfig::default();

        for placeholder in ["{title}", "{link}", "{classes}", "{children}"] {
            assert!(config.item_template.contains(placeholder));
        }
    }

    #[test]
    fn test_default_excludes_stacked_list() {
        let config = MenuConfig::default();

        assert!(config.excluded_parent_types.contains("stacked-list"));
        assert_eq!(config.excluded_parent_types.len(), 1);
    }

    #[test]
    fn test_builder_overrides() {
        let config = MenuConfig::default()
            .with_item_template("<li>{title}</li>")
            .with_excluded_parent_types(["gallery", "archive"])
            .with_recursion_limit(8);

        assert_eq!(config.item_template, "<li>{title}</li>");
        assert!(config.excluded_parent_types.contains("gallery"));
        assert!(config.excluded_parent_types.contains("archive"));
        assert!(!config.excluded_parent_types.contains("stacked-list"));
        assert_eq!(config.recursion_limit, 8);
    }
}
