use iced::Task;

use crate::app::{App, AppEvent};

/// Move the shell to `path`. Unknown routes still render, as "Not found".
pub(crate) fn navigate(app: &mut App, path: String) -> Task<AppEvent> {
    if app.widgets.sidebar.menu().resolve_active(&path).is_none() {
        log::debug!("route {path} has no menu entry");
    }

    if app.state.navigate(path) {
        log::info!("navigated to {}", app.state.current_path);
    }

    Task::none()
}
