//! Serializing a menu item tree into nested list markup.
//!
//! Pure formatting over an already-built [`MenuItem`] tree. All traversal
//! decisions (what appears, what expands) are made by the expander; this
//! module only turns the result into text.

use std::fmt::Write;

use crate::item::MenuItem;

/// Escape text for inclusion in markup.
///
/// Escapes `&`, `<`, `>`, `"`, and `'`, which also makes the result safe
/// inside a double-quoted attribute value.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render a tree of menu items as a nested `<ul>`.
///
/// `site_tree_level` labels the list with the depth of its pages in the
/// site tree, `nesting_level` with the depth within this render call. The
/// two differ when the menu did not start from the top level. The
/// `nested-menu` marker class goes on only the outermost list.
pub(crate) fn render_list(
    items: &[MenuItem],
    site_tree_level: usize,
    nesting_level: usize,
    template: &str,
) -> String {
    let mut out = String::new();
    if nesting_level == 1 {
        write!(
            out,
            r#"<ul class="nested-menu nested-menu-level-{site_tree_level} nested-menu-nesting-{nesting_level}">"#
        )
        .unwrap();
    } else {
        write!(
            out,
            r#"<ul class="nested-menu-level-{site_tree_level} nested-menu-nesting-{nesting_level}">"#
        )
        .unwrap();
    }

    for item in items {
        let children = if item.children.is_empty() {
            String::new()
        } else {
            render_list(
                &item.children,
                site_tree_level + 1,
                nesting_level + 1,
                template,
            )
        };

        out.push_str(&fill_template(
            template,
            &escape_html(&item.title),
            &escape_html(&item.link),
            &item.class_attr(),
            &children,
        ));
    }

    out.push_str("</ul>");
    out
}

/// Substitute the four item placeholders in a single pass.
///
/// A single scan keeps substituted content from being rescanned, so a page
/// titled `{link}` cannot smuggle a second substitution in.
fn fill_template(template: &str, title: &str, link: &str, classes: &str, children: &str) -> String {
    let mut out =
        String::with_capacity(template.len() + title.len() + link.len() + classes.len() + children.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let mut matched = None;
        for (placeholder, value) in [
            ("{title}", title),
            ("{link}", link),
            ("{classes}", classes),
            ("{children}", children),
        ] {
            if tail.starts_with(placeholder) {
                matched = Some((placeholder.len(), value));
                break;
            }
        }

        match matched {
            Some((len, value)) => {
                out.push_str(value);
                rest = &tail[len..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
