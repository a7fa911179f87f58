mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use std::time::{Duration, Instant};

pub(crate) use event::{TOASTS_TICK_MS, ToastsEvent, ToastsIntent};
use iced::Task;
use model::{Notification, Notifier, ToastsViewModel};
use state::ToastsState;

/// Toasts widget: the notification collaborator of the shell.
pub(crate) struct ToastsWidget {
    state: ToastsState,
}

impl ToastsWidget {
    pub(crate) fn new(timeout: Duration, max_visible: usize) -> Self {
        Self {
            state: ToastsState::new(timeout, max_visible),
        }
    }

    /// Reduce an intent event into state updates.
    pub(crate) fn reduce(&mut self, event: ToastsIntent) -> Task<ToastsEvent> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn vm(&self) -> ToastsViewModel<'_> {
        ToastsViewModel {
            toasts: self.state.toasts(),
        }
    }

    /// Whether any toast is on screen and the expiry tick is needed.
    pub(crate) fn has_toasts(&self) -> bool {
        !self.state.is_empty()
    }
}

impl Notifier for ToastsWidget {
    fn notify(&mut self, notification: Notification) {
        log::info!(
            "notification ({:?}): {}",
            notification.kind(),
            notification.message()
        );
        self.state.push(notification, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::ToastsWidget;
    use crate::widgets::toasts::model::{
        Notification, NotificationKind, Notifier,
    };

    #[test]
    fn given_notification_when_notified_then_toast_is_visible() {
        let mut widget = ToastsWidget::new(Duration::from_secs(4), 3);

        widget.notify(Notification::error("Unknown preference: Beta"));

        let vm = widget.vm();
        assert!(widget.has_toasts());
        assert_eq!(vm.toasts.len(), 1);
        assert_eq!(vm.toasts[0].notification.kind(), NotificationKind::Error);
    }
}
