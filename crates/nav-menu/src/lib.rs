//! Nested navigation menu rendering over a page tree.
//!
//! This crate turns a page hierarchy (abstracted by the `nav-tree` crate)
//! into nested `<ul>` navigation markup. A menu can start at any level of
//! the hierarchy, nests only into the section the current page sits in,
//! and can be bounded to a maximum depth.
//!
//! # Architecture
//!
//! - [`MenuRenderer`] is the entry point: `has_menu()`, `build()`, and
//!   `render()` over an injected [`TreeSource`](nav_tree::TreeSource)
//! - [`VisibilityFilter`] drops pages the requester should not see;
//!   [`NullFilter`] keeps everything
//! - [`NavContext`] classifies pages relative to the current page
//!   ([`LinkingMode`])
//! - [`MenuItem`] is the structured output; the markup formatter
//!   serializes it using the [`MenuConfig`] item template
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use nav_menu::{MenuConfig, MenuRenderer};
//!
//! let renderer = MenuRenderer::new(source)
//!     .with_config(MenuConfig::default().with_recursion_limit(16));
//!
//! if renderer.has_menu(2, Some(&current))? {
//!     let html = renderer.render(2, Some(3), Some(&current))?;
//! }
//! ```

mod config;
mod context;
mod expand;
mod filter;
mod html;
mod item;
mod menu;

pub use config::{DEFAULT_ITEM_TEMPLATE, MenuConfig};
pub use context::{LinkingMode, NavContext};
pub use filter::{NullFilter, VisibilityFilter};
pub use html::escape_html;
pub use item::MenuItem;
pub use menu::{MenuError, MenuRenderer};
