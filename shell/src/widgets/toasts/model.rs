use std::time::Instant;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotificationKind {
    Success,
    Error,
}

/// A message handed to the notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notification {
    message: String,
    kind: NotificationKind,
}

impl Notification {
    pub(crate) fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn kind(&self) -> NotificationKind {
        self.kind
    }
}

/// Fire-and-forget sink for user notifications.
pub(crate) trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// A notification currently on screen.
#[derive(Debug, Clone)]
pub(crate) struct Toast {
    pub(crate) id: u64,
    pub(crate) notification: Notification,
    pub(crate) created_at: Instant,
}

/// Read-only view model for the toast stack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ToastsViewModel<'a> {
    pub(crate) toasts: &'a [Toast],
}
