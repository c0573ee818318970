//! Render-ready menu items.

/// One entry in a built menu tree.
///
/// Ephemeral output of a single render call: the label and link are copied
/// out of the source page, the classes are fully resolved, and the tree
/// belongs to the caller. Text is raw here; escaping happens when the tree
/// is formatted into markup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MenuItem {
    /// Menu label.
    pub title: String,
    /// Link target.
    pub link: String,
    /// Resolved state classes, e.g. `["first", "section", "open"]`.
    pub classes: Vec<String>,
    /// Nested sub-menu items, empty for leaves.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// The classes joined for a class attribute.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}
