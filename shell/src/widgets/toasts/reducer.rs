use iced::Task;

use super::event::{ToastsEvent, ToastsIntent};
use super::state::ToastsState;

/// Reduce a toasts intent into state updates.
pub(crate) fn reduce(
    state: &mut ToastsState,
    event: ToastsIntent,
) -> Task<ToastsEvent> {
    match event {
        ToastsIntent::Tick(now) => {
            if state.expire(now) {
                log::debug!("expired toasts, {} left", state.toasts().len());
            }
            Task::none()
        },
        ToastsIntent::Dismiss { id } => {
            state.dismiss(id);
            Task::none()
        },
    }
}
