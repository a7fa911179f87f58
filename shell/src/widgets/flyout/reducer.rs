use iced::Task;

use super::event::{FlyoutEffect, FlyoutEvent, FlyoutIntent};
use super::state::FlyoutState;

/// Reduce a flyout intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut FlyoutState,
    event: FlyoutIntent,
) -> Task<FlyoutEvent> {
    match apply(state, event) {
        Some(effect) => Task::done(FlyoutEvent::Effect(effect)),
        None => Task::none(),
    }
}

/// Apply an intent to `state` and return the effect it requests, if any.
pub(super) fn apply(
    state: &mut FlyoutState,
    event: FlyoutIntent,
) -> Option<FlyoutEffect> {
    match event {
        FlyoutIntent::GroupToggled { title, open } => {
            state.set_group(title, open);
            None
        },
        FlyoutIntent::EntryPressed { path } => {
            state.close_group();
            Some(FlyoutEffect::Navigate { path })
        },
        FlyoutIntent::PointerExited => {
            state.follow_route();
            Some(FlyoutEffect::CollapseSidebar)
        },
    }
}
