use std::time::Instant;

/// Interval of the expiry tick while toasts are visible.
pub(crate) const TOASTS_TICK_MS: u64 = 250;

/// Intent events handled by the toasts widget.
#[derive(Debug, Clone)]
pub(crate) enum ToastsIntent {
    /// Periodic expiry check.
    Tick(Instant),
    /// Close button pressed on a toast.
    Dismiss { id: u64 },
}

/// Toasts event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ToastsEvent {
    Intent(ToastsIntent),
}
