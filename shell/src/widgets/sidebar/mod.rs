mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{
    HoverSurface, SidebarEffect, SidebarEvent, SidebarIntent,
};
use iced::Task;
use model::SidebarViewModel;
use shell_ui_menu::MenuTree;
pub(crate) use state::Brand;
use state::SidebarState;

/// Sidebar widget: icon rail plus the hover-driven expansion mode.
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    /// Construct a collapsed sidebar over `menu`.
    pub(crate) fn new(menu: MenuTree, brand: Brand) -> Self {
        Self {
            state: SidebarState::new(menu, brand),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: SidebarIntent) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model with the entry matching `current_path`.
    pub(crate) fn vm(&self, current_path: &str) -> SidebarViewModel<'_> {
        SidebarViewModel {
            mode: self.state.mode(),
            menu: self.state.menu(),
            active: self.state.menu().resolve_active(current_path),
            brand: self.state.brand_text(),
        }
    }

    pub(crate) fn menu(&self) -> &MenuTree {
        self.state.menu()
    }
}
