/// Intent events handled by the flyout panel.
#[derive(Debug, Clone)]
pub(crate) enum FlyoutIntent {
    /// Group header pressed; `open` is the requested dropdown state.
    GroupToggled { title: String, open: bool },
    EntryPressed { path: String },
    PointerExited,
}

/// Effect events produced by the flyout reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FlyoutEffect {
    Navigate { path: String },
    /// Pointer left the flyout; the sidebar must collapse with it.
    CollapseSidebar,
}

/// Flyout event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum FlyoutEvent {
    Intent(FlyoutIntent),
    Effect(FlyoutEffect),
}
