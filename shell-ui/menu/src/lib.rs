//! Menu tree model and active route resolution.
//!
//! This crate is UI-agnostic. It owns the shape of the navigation menu
//! ([`MenuEntry`], [`MenuTree`]) and answers one question for the renderer:
//! which entry, if any, matches the current route ([`resolve_active`]).
//!
//! Menus are at most two levels deep. A top-level entry may carry
//! `sub_items`, which makes it a group; children of a group never nest
//! further. [`MenuTree::new`] rejects trees that break this rule or reuse a
//! title inside one sibling list, because titles double as identity keys.
//!
//! # Quick Example
//!
//! ```
//! use shell_ui_menu::{EntryRef, MenuEntry, MenuTree};
//!
//! let tree = MenuTree::new(vec![
//!     MenuEntry::link("Dashboard", "/"),
//!     MenuEntry::group(
//!         "Sales",
//!         vec![MenuEntry::link("Orders", "/sales/orders")],
//!     ),
//! ])
//! .expect("menu is valid");
//!
//! assert_eq!(
//!     tree.resolve_active("/sales/orders"),
//!     Some(EntryRef::Sub { parent: 1, index: 0 }),
//! );
//! assert_eq!(tree.resolve_active("/missing"), None);
//! ```

mod error;
mod model;
mod resolve;

pub use error::MenuError;
pub use model::{EntryRef, IconRef, MenuEntry, MenuTree};
pub use resolve::resolve_active;
