use std::time::{Duration, Instant};

use super::model::{Notification, Toast};

/// Internal runtime state for visible toasts, oldest first.
#[derive(Debug)]
pub(crate) struct ToastsState {
    toasts: Vec<Toast>,
    next_id: u64,
    timeout: Duration,
    max_visible: usize,
}

impl ToastsState {
    pub(crate) fn new(timeout: Duration, max_visible: usize) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            timeout,
            max_visible: max_visible.max(1),
        }
    }

    pub(crate) fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Append a toast, dropping the oldest ones beyond the visible cap.
    pub(crate) fn push(
        &mut self,
        notification: Notification,
        now: Instant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            notification,
            created_at: now,
        });

        let overflow = self.toasts.len().saturating_sub(self.max_visible);
        if overflow > 0 {
            self.toasts.drain(..overflow);
        }

        id
    }

    /// Remove toasts older than the timeout. Returns whether any expired.
    pub(crate) fn expire(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        let timeout = self.timeout;
        self.toasts.retain(|toast| {
            now.saturating_duration_since(toast.created_at) < timeout
        });
        self.toasts.len() != before
    }

    pub(crate) fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }
}
