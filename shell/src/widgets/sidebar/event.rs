/// Navigation surfaces, besides the flyout, that keep the sidebar open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HoverSurface {
    Brand,
    Rail,
}

/// Intent events handled by the icon rail.
#[derive(Debug, Clone)]
pub(crate) enum SidebarIntent {
    /// Pointer entered the navigation column.
    PointerEntered,
    /// Pointer left the navigation column.
    PointerExited,
    SurfaceEntered(HoverSurface),
    SurfaceExited(HoverSurface),
    /// Pointer left the flyout panel.
    FlyoutExited,
    EntryPressed { path: String },
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SidebarEffect {
    Navigate { path: String },
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
