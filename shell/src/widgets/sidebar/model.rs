use shell_ui_menu::{EntryRef, IconRef, MenuEntry, MenuError, MenuTree};

pub(crate) const SIDEBAR_RAIL_WIDTH: f32 = 52.0;
pub(crate) const FLYOUT_WIDTH: f32 = 200.0;

/// Whether the flyout beside the icon rail is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ExpansionMode {
    #[default]
    Collapsed,
    Expanded,
}

/// Read-only view model for the icon rail.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewModel<'a> {
    pub(crate) mode: ExpansionMode,
    pub(crate) menu: &'a MenuTree,
    pub(crate) active: Option<EntryRef>,
    pub(crate) brand: &'a str,
}

impl SidebarViewModel<'_> {
    pub(crate) fn is_expanded(&self) -> bool {
        self.mode == ExpansionMode::Expanded
    }

    /// Whether the rail icon at `index` is highlighted: the active leaf
    /// itself, or the group holding the active child.
    pub(crate) fn is_rail_active(&self, index: usize) -> bool {
        self.active.is_some_and(|entry| entry.top_index() == index)
    }
}

/// Navigation menu of the admin shell.
pub(crate) fn menu_catalog() -> Result<MenuTree, MenuError> {
    MenuTree::new(vec![
        MenuEntry::link("Dashboard", "/")
            .with_icon(IconRef::new("dashboard")),
        MenuEntry::group(
            "Inventory",
            vec![
                MenuEntry::link("Products", "/inventory/products"),
                MenuEntry::link("Stock", "/inventory/stock"),
            ],
        )
        .with_icon(IconRef::new("inventory")),
        MenuEntry::group(
            "Sales",
            vec![
                MenuEntry::link("Orders", "/sales/orders"),
                MenuEntry::link("Customers", "/sales/customers"),
            ],
        )
        .with_icon(IconRef::new("sales")),
        MenuEntry::link("Reports", "/reports")
            .with_icon(IconRef::new("reports")),
        MenuEntry::link("Settings", "/settings")
            .with_icon(IconRef::new("settings")),
    ])
}
