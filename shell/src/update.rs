use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Sidebar(event) => routers::sidebar::route(app, event),
        AppEvent::Flyout(event) => routers::flyout::route(app, event),
        AppEvent::Settings(event) => routers::settings::route(app, event),
        AppEvent::Toasts(event) => routers::toasts::route(app, event),
        AppEvent::Navigate { path } => routers::navigation::navigate(app, path),
    }
}
