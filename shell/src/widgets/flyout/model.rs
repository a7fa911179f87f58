use shell_ui_menu::{EntryRef, MenuTree};

/// Read-only view model for the expanded menu panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FlyoutViewModel<'a> {
    pub(crate) menu: &'a MenuTree,
    pub(crate) active: Option<EntryRef>,
    pub(crate) open_group: Option<&'a str>,
}

impl FlyoutViewModel<'_> {
    pub(crate) fn is_open(&self, title: &str) -> bool {
        self.open_group == Some(title)
    }
}

/// Title of the group holding the active child route.
pub(crate) fn active_group(
    menu: &MenuTree,
    active: Option<EntryRef>,
) -> Option<&str> {
    match active? {
        EntryRef::Sub { parent, .. } => menu
            .get(EntryRef::Top { index: parent })
            .map(|group| group.title()),
        EntryRef::Top { .. } => None,
    }
}
