use std::collections::BTreeSet;

use crate::error::MenuError;
use crate::resolve::resolve_active;

/// Opaque reference to a renderable glyph.
///
/// The menu model never interprets the key; renderers map it to an asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconRef(String);

impl IconRef {
    /// Create an icon reference from its lookup key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Return the lookup key.
    pub fn key(&self) -> &str {
        &self.0
    }
}

/// One navigable or group node of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    title: String,
    path: Option<String>,
    icon: Option<IconRef>,
    sub_items: Option<Vec<MenuEntry>>,
}

impl MenuEntry {
    /// Create a leaf entry that navigates to `path`.
    pub fn link(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: Some(path.into()),
            icon: None,
            sub_items: None,
        }
    }

    /// Create a group header without a route of its own.
    pub fn group(title: impl Into<String>, sub_items: Vec<MenuEntry>) -> Self {
        Self {
            title: title.into(),
            path: None,
            icon: None,
            sub_items: Some(sub_items),
        }
    }

    /// Attach an icon reference.
    pub fn with_icon(mut self, icon: IconRef) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Attach a route to the entry, including group headers.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Display label, unique among siblings.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Route this entry navigates to, if any.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn icon(&self) -> Option<&IconRef> {
        self.icon.as_ref()
    }

    /// Children of a group; empty for leaves.
    pub fn sub_items(&self) -> &[MenuEntry] {
        self.sub_items.as_deref().unwrap_or(&[])
    }

    /// Whether the entry declares sub-items and renders as a group.
    pub fn is_group(&self) -> bool {
        self.sub_items.is_some()
    }

    /// Whether this entry's route equals `current_path` exactly.
    pub fn matches(&self, current_path: &str) -> bool {
        self.path() == Some(current_path)
    }
}

/// Address of one entry inside a [`MenuTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryRef {
    /// Top-level entry at `index`.
    Top { index: usize },
    /// Child `index` of the top-level group at `parent`.
    Sub { parent: usize, index: usize },
}

impl EntryRef {
    /// Index of the top-level entry that owns this reference.
    pub fn top_index(&self) -> usize {
        match *self {
            EntryRef::Top { index } => index,
            EntryRef::Sub { parent, .. } => parent,
        }
    }
}

/// Validated, read-only menu catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTree {
    entries: Vec<MenuEntry>,
}

impl MenuTree {
    /// Build a tree, rejecting deep nesting and duplicate sibling titles.
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, MenuError> {
        ensure_unique_titles(&entries)?;

        for entry in &entries {
            ensure_unique_titles(entry.sub_items())?;

            if let Some(child) =
                entry.sub_items().iter().find(|child| child.is_group())
            {
                return Err(MenuError::NestingTooDeep {
                    parent: entry.title.clone(),
                    child: child.title.clone(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// A tree without entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Top-level entries in display order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Look up the entry addressed by `entry`.
    pub fn get(&self, entry: EntryRef) -> Option<&MenuEntry> {
        match entry {
            EntryRef::Top { index } => self.entries.get(index),
            EntryRef::Sub { parent, index } => {
                self.entries.get(parent)?.sub_items().get(index)
            },
        }
    }

    /// Resolve the entry matching `current_path`, see [`resolve_active`].
    pub fn resolve_active(&self, current_path: &str) -> Option<EntryRef> {
        resolve_active(current_path, &self.entries)
    }
}

fn ensure_unique_titles(entries: &[MenuEntry]) -> Result<(), MenuError> {
    let mut seen = BTreeSet::new();
    for entry in entries {
        if !seen.insert(entry.title.as_str()) {
            return Err(MenuError::DuplicateTitle {
                title: entry.title.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{EntryRef, MenuEntry, MenuTree};
    use crate::MenuError;

    fn sample_tree() -> MenuTree {
        MenuTree::new(vec![
            MenuEntry::link("Dashboard", "/"),
            MenuEntry::group(
                "Inventory",
                vec![
                    MenuEntry::link("Products", "/inventory/products"),
                    MenuEntry::link("Stock", "/inventory/stock"),
                ],
            ),
        ])
        .expect("sample tree should be valid")
    }

    #[test]
    fn given_three_level_menu_when_building_tree_then_nesting_is_rejected() {
        let result = MenuTree::new(vec![MenuEntry::group(
            "Sales",
            vec![MenuEntry::group(
                "Regions",
                vec![MenuEntry::link("North", "/sales/north")],
            )],
        )]);

        assert_eq!(
            result,
            Err(MenuError::NestingTooDeep {
                parent: String::from("Sales"),
                child: String::from("Regions"),
            })
        );
    }

    #[test]
    fn given_duplicate_top_level_titles_when_building_tree_then_rejected() {
        let result = MenuTree::new(vec![
            MenuEntry::link("Reports", "/reports"),
            MenuEntry::link("Reports", "/reports/legacy"),
        ]);

        assert_eq!(
            result,
            Err(MenuError::DuplicateTitle {
                title: String::from("Reports"),
            })
        );
    }

    #[test]
    fn given_duplicate_child_titles_when_building_tree_then_rejected() {
        let result = MenuTree::new(vec![MenuEntry::group(
            "Sales",
            vec![
                MenuEntry::link("Orders", "/sales/orders"),
                MenuEntry::link("Orders", "/sales/orders/archive"),
            ],
        )]);

        assert!(matches!(result, Err(MenuError::DuplicateTitle { .. })));
    }

    #[test]
    fn given_same_title_in_different_groups_when_building_tree_then_accepted()
    {
        let result = MenuTree::new(vec![
            MenuEntry::group(
                "Sales",
                vec![MenuEntry::link("Overview", "/sales")],
            ),
            MenuEntry::group(
                "Inventory",
                vec![MenuEntry::link("Overview", "/inventory")],
            ),
        ]);

        assert!(result.is_ok());
    }

    #[test]
    fn given_entry_refs_when_get_then_addressed_entries_are_returned() {
        let tree = sample_tree();

        let top = tree.get(EntryRef::Top { index: 0 });
        let sub = tree.get(EntryRef::Sub {
            parent: 1,
            index: 1,
        });
        let missing = tree.get(EntryRef::Sub {
            parent: 0,
            index: 0,
        });

        assert_eq!(top.map(MenuEntry::title), Some("Dashboard"));
        assert_eq!(sub.map(MenuEntry::title), Some("Stock"));
        assert!(missing.is_none());
    }

    #[test]
    fn given_group_entry_when_inspected_then_it_has_no_path_and_children() {
        let tree = sample_tree();
        let group = &tree.entries()[1];

        assert!(group.is_group());
        assert_eq!(group.path(), None);
        assert_eq!(group.sub_items().len(), 2);
        assert!(tree.entries()[0].sub_items().is_empty());
    }

    #[test]
    fn given_child_ref_when_top_index_taken_then_parent_index_is_returned() {
        assert_eq!(EntryRef::Top { index: 3 }.top_index(), 3);
        assert_eq!(
            EntryRef::Sub {
                parent: 1,
                index: 0
            }
            .top_index(),
            1
        );
    }
}
