mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{FlyoutEffect, FlyoutEvent, FlyoutIntent};
use iced::Task;
use model::FlyoutViewModel;
use shell_ui_menu::MenuTree;
use state::{Dropdown, FlyoutState};

/// Flyout widget: the labelled menu panel shown while the sidebar is
/// expanded.
pub(crate) struct FlyoutWidget {
    state: FlyoutState,
}

impl FlyoutWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: FlyoutState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: FlyoutIntent) -> Task<FlyoutEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Apply an intent and return its effect without wrapping it in a task.
    #[cfg(test)]
    pub(crate) fn apply(
        &mut self,
        event: FlyoutIntent,
    ) -> Option<FlyoutEffect> {
        reducer::apply(&mut self.state, event)
    }

    /// Build a view model. Until a group is toggled, the group holding the
    /// active route is shown open.
    pub(crate) fn vm<'a>(
        &'a self,
        menu: &'a MenuTree,
        current_path: &str,
    ) -> FlyoutViewModel<'a> {
        let active = menu.resolve_active(current_path);
        let open_group = match self.state.dropdown() {
            Dropdown::FollowRoute => model::active_group(menu, active),
            Dropdown::Open(title) => Some(title.as_str()),
            Dropdown::Closed => None,
        };

        FlyoutViewModel {
            menu,
            active,
            open_group,
        }
    }
}
