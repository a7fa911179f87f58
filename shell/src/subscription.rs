use std::time::Duration;

use iced::Subscription;

use crate::app::{App, AppEvent};
use crate::widgets::toasts::{TOASTS_TICK_MS, ToastsEvent, ToastsIntent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    // Expiry tick only while something is on screen
    if !app.widgets.toasts.has_toasts() {
        return Subscription::none();
    }

    iced::time::every(Duration::from_millis(TOASTS_TICK_MS)).map(|now| {
        AppEvent::Toasts(ToastsEvent::Intent(ToastsIntent::Tick(now)))
    })
}
