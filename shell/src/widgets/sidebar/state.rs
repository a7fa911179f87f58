use shell_ui_menu::MenuTree;

use super::event::HoverSurface;
use super::model::ExpansionMode;

/// Runtime state of the icon rail.
#[derive(Debug)]
pub(super) struct SidebarState {
    mode: ExpansionMode,
    menu: MenuTree,
    brand: Brand,
    brand_hovered: bool,
    rail_hovered: bool,
}

/// Brand text shown above the navigation, long and short forms.
#[derive(Debug, Clone)]
pub(crate) struct Brand {
    pub(crate) title: String,
    pub(crate) short: String,
}

impl SidebarState {
    pub(super) fn new(menu: MenuTree, brand: Brand) -> Self {
        Self {
            mode: ExpansionMode::Collapsed,
            menu,
            brand,
            brand_hovered: false,
            rail_hovered: false,
        }
    }

    pub(super) fn mode(&self) -> ExpansionMode {
        self.mode
    }

    pub(super) fn menu(&self) -> &MenuTree {
        &self.menu
    }

    /// Brand text for the current mode.
    pub(super) fn brand_text(&self) -> &str {
        match self.mode {
            ExpansionMode::Expanded => &self.brand.title,
            ExpansionMode::Collapsed => &self.brand.short,
        }
    }

    /// Whether the pointer rests on the brand header or the rail.
    pub(super) fn is_surface_hovered(&self) -> bool {
        self.brand_hovered || self.rail_hovered
    }

    pub(super) fn set_surface_hovered(
        &mut self,
        surface: HoverSurface,
        hovered: bool,
    ) {
        match surface {
            HoverSurface::Brand => self.brand_hovered = hovered,
            HoverSurface::Rail => self.rail_hovered = hovered,
        }
    }

    pub(super) fn expand(&mut self) {
        self.mode = ExpansionMode::Expanded;
    }

    /// Collapse and forget surface hover; the pointer is outside.
    pub(super) fn collapse(&mut self) {
        self.mode = ExpansionMode::Collapsed;
        self.brand_hovered = false;
        self.rail_hovered = false;
    }
}
